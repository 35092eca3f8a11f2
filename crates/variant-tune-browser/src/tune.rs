//! The variant tune component.
//!
//! One `VariantTune` instance exists per block. The host calls
//! `render()` to get the toggle row for its settings panel, `wrap()` to
//! get the element that hosts the block content, and `save()` to read
//! the persisted value back at serialization time. Clicks on the toggle
//! row flow through a single delegated listener into the apply routine,
//! which keeps persisted state, wrapper CSS, and toggle visuals
//! consistent.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use smol_str::SmolStr;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Node};

use variant_tune_core::{
    DATA_ATTR, EditorExtension, ExtensionKind, TOGGLE_ROW_CLASS, TuneConfig, VARIANTS,
    VariantState, WRAPPER_CLASS, variant_class,
};

use crate::error::TuneError;
use crate::host::{BlockHandle, HostApi, StyleTokens, TooltipOptions, TooltipPlacement};

/// Delay before a toggle tooltip hides, in ms.
const TOOLTIP_HIDING_DELAY_MS: u32 = 200;

/// Per-block variant picker: a row of mutually exclusive icon toggles in
/// the block settings panel, plus the wrapper that carries the chosen
/// variant's CSS class.
pub struct VariantTune {
    inner: Rc<RefCell<TuneInner>>,
}

struct TuneInner {
    host: Rc<dyn HostApi>,
    block: Rc<dyn BlockHandle>,
    styles: StyleTokens,
    state: VariantState,
    /// Created by `wrap()`; absent until then.
    wrapper: Option<Element>,
    /// This instance's toggle controls, in catalog order. Replaced on
    /// every `render()`. Resync touches only these references, so other
    /// instances' rows are never affected.
    toggles: Vec<Element>,
    /// Delegated click listener on the current toggle row. Replacing it
    /// deregisters the previous row's listener on drop.
    listener: Option<EventListener>,
}

impl VariantTune {
    /// Create a tune for one block.
    ///
    /// `saved` is the previously persisted variant value, if any; unknown
    /// values are kept verbatim and simply match nothing. `config` is
    /// reserved. The block handle is used only for change notification.
    pub fn new(
        host: Rc<dyn HostApi>,
        saved: Option<&str>,
        _config: TuneConfig,
        block: Rc<dyn BlockHandle>,
    ) -> Self {
        let styles = host.style_tokens();
        Self {
            inner: Rc::new(RefCell::new(TuneInner {
                host,
                block,
                styles,
                state: VariantState::new(saved),
                wrapper: None,
                toggles: Vec::new(),
                listener: None,
            })),
        }
    }

    /// Build the toggle row for the block settings panel.
    ///
    /// Safe to call on every panel open: each call produces a fresh
    /// container with a fresh delegated listener and replaces the stored
    /// toggle references, so earlier rows become inert. Does not mutate
    /// persisted state.
    pub fn render(&self) -> Result<Element, TuneError> {
        let document = document()?;

        let container = document.create_element("div")?;
        container.set_attribute("class", TOGGLE_ROW_CLASS)?;

        let mut toggles = Vec::with_capacity(VARIANTS.len());
        {
            let inner = self.inner.borrow();
            for def in &VARIANTS {
                let toggle = document.create_element("div")?;
                toggle.set_attribute("class", &inner.styles.settings_button)?;
                toggle.set_attribute(DATA_ATTR, def.name)?;
                toggle.set_inner_html(def.icon);
                let _ = toggle.class_list().toggle_with_force(
                    &inner.styles.settings_button_active,
                    inner.state.is_active(def.name),
                );

                let title = inner.host.translate(def.title);
                inner.host.tooltip_on_hover(
                    &toggle,
                    &title,
                    &TooltipOptions {
                        placement: TooltipPlacement::Top,
                        hiding_delay_ms: TOOLTIP_HIDING_DELAY_MS,
                    },
                );

                container.append_child(&toggle)?;
                toggles.push(toggle);
            }
        }

        // One delegated listener per row, not one per toggle.
        let listener = EventListener::new(&container, "click", {
            let inner = Rc::clone(&self.inner);
            move |event| on_toggle_click(&inner, event)
        });

        let mut inner = self.inner.borrow_mut();
        inner.toggles = toggles;
        inner.listener = Some(listener);
        tracing::debug!(value = %inner.state.value(), "rendered variant toggle row");

        Ok(container)
    }

    /// Create the wrapper element for the block's visual root, with the
    /// current variant's class applied, and move `content` inside it.
    ///
    /// The host is expected to call this once per instance; a second
    /// call replaces (and orphans) the previous wrapper.
    pub fn wrap(&self, content: &Node) -> Result<Element, TuneError> {
        let document = document()?;

        let wrapper = document.create_element("div")?;
        wrapper.set_attribute("class", WRAPPER_CLASS)?;

        {
            let mut inner = self.inner.borrow_mut();
            if inner.wrapper.is_some() {
                tracing::warn!("wrap() called more than once; replacing the previous wrapper");
            }
            inner.wrapper = Some(wrapper.clone());
            let value = SmolStr::new(inner.state.value());
            inner.apply(&value);
        }

        wrapper.append_child(content)?;
        Ok(wrapper)
    }

    /// The persisted variant value, empty if none. Idempotent and free
    /// of side effects; the host may call it at any time.
    pub fn save(&self) -> SmolStr {
        SmolStr::new(self.inner.borrow().state.value())
    }
}

impl EditorExtension for VariantTune {
    const KIND: ExtensionKind = ExtensionKind::Tune;
}

/// Delegated click handler for the toggle row.
///
/// Resolves the nearest enclosing toggle control; clicks that land on
/// none (row padding, decorative children) are ignored. The decision is
/// made from the in-memory state, then the apply routine resyncs wrapper
/// and toggle classes, and the host is notified exactly once.
fn on_toggle_click(inner: &Rc<RefCell<TuneInner>>, event: &Event) {
    let Some(target) = event.target() else {
        return;
    };
    let Some(element) = target.dyn_ref::<Element>() else {
        return;
    };
    let Ok(Some(toggle)) = element.closest(&format!("[{DATA_ATTR}]")) else {
        tracing::trace!("click outside any toggle ignored");
        return;
    };
    let Some(name) = toggle.get_attribute(DATA_ATTR) else {
        return;
    };

    let block = {
        let mut inner = inner.borrow_mut();
        let next = SmolStr::new(inner.state.toggle(&name));
        inner.apply(&next);
        Rc::clone(&inner.block)
    };

    // Fires once per resolved click, after state and visuals are
    // consistent. The borrow above is released first so a host that
    // synchronously reads save() does not re-enter it.
    block.dispatch_change();
}

impl TuneInner {
    /// Set the persisted value and resync every projection of it: the
    /// wrapper's variant class and each toggle's active class.
    ///
    /// Missing pieces are skipped silently - before `wrap()` there is no
    /// wrapper, and before `render()` (or with the panel closed) there
    /// are no toggles. Whatever exists is brought in line.
    fn apply(&mut self, value: &str) {
        self.state.set(value);

        for (i, def) in VARIANTS.iter().enumerate() {
            let active = def.name == value;
            if let Some(wrapper) = &self.wrapper {
                let _ = wrapper
                    .class_list()
                    .toggle_with_force(&variant_class(def.name), active);
            }
            if let Some(toggle) = self.toggles.get(i) {
                let _ = toggle
                    .class_list()
                    .toggle_with_force(&self.styles.settings_button_active, active);
            }
        }
        tracing::trace!(value = %value, "applied variant");
    }
}

fn document() -> Result<web_sys::Document, TuneError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(TuneError::NoDocument)
}
