// Copyright 2026 the Preroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM page.
//!
//! [`DomPage`] resolves player roles with `querySelector`, toggles them with
//! `style.display`, and keeps every click listener it installs so it can be
//! removed again.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use preroll_core::capability::{ClickAction, Page, UiRole};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, HtmlElement, HtmlVideoElement};

use crate::dispatch::{Dispatcher, Message};

type ListenerClosure = Closure<dyn FnMut(Event)>;

/// Located elements, one slot per [`UiRole`].
///
/// Shared between the page and the SDK backend, which renders into the ad
/// container and attaches the ads manager to the content video.
#[derive(Debug, Default)]
pub(crate) struct Elements {
    slots: RefCell<[Option<HtmlElement>; UiRole::COUNT]>,
}

impl Elements {
    pub(crate) fn get(&self, role: UiRole) -> Option<HtmlElement> {
        self.slots.borrow()[role.index()].clone()
    }

    fn set(&self, role: UiRole, element: Option<HtmlElement>) {
        self.slots.borrow_mut()[role.index()] = element;
    }

    /// The element for `role`, if it is a `<video>`.
    pub(crate) fn video(&self, role: UiRole) -> Option<HtmlVideoElement> {
        self.get(role)?.dyn_into().ok()
    }
}

struct ClickListener {
    role: UiRole,
    action: ClickAction,
    closure: ListenerClosure,
}

/// [`Page`] over the live document.
pub(crate) struct DomPage {
    document: Document,
    elements: Rc<Elements>,
    dispatcher: Dispatcher,
    clicks: Vec<ClickListener>,
    ended: Option<ListenerClosure>,
}

impl core::fmt::Debug for DomPage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomPage")
            .field("elements", &self.elements)
            .field("clicks_len", &self.clicks.len())
            .field("ended_bound", &self.ended.is_some())
            .finish_non_exhaustive()
    }
}

impl DomPage {
    pub(crate) fn new(document: Document, elements: Rc<Elements>, dispatcher: Dispatcher) -> Self {
        Self {
            document,
            elements,
            dispatcher,
            clicks: Vec::new(),
            ended: None,
        }
    }

    fn content_video(&self) -> Option<HtmlVideoElement> {
        self.elements.video(UiRole::ContentVideo)
    }
}

impl Page for DomPage {
    fn locate(&mut self, role: UiRole, selector: &str) -> bool {
        let found = self
            .document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let located = found.is_some();
        self.elements.set(role, found);
        located
    }

    fn set_visible(&mut self, role: UiRole, visible: bool) {
        if let Some(el) = self.elements.get(role) {
            let display = if visible { "block" } else { "none" };
            let _ = el.style().set_property("display", display);
        }
    }

    fn bind_click(&mut self, role: UiRole, action: ClickAction) {
        let Some(el) = self.elements.get(role) else {
            return;
        };
        let dispatcher = self.dispatcher.clone();
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            dispatcher.send(Message::Click(action));
        }) as Box<dyn FnMut(Event)>);
        if el
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .is_ok()
        {
            self.clicks.push(ClickListener {
                role,
                action,
                closure,
            });
        }
    }

    fn unbind_click(&mut self, role: UiRole, action: ClickAction) {
        let Some(pos) = self
            .clicks
            .iter()
            .position(|l| l.role == role && l.action == action)
        else {
            return;
        };
        let listener = self.clicks.remove(pos);
        if let Some(el) = self.elements.get(role) {
            let _ = el.remove_event_listener_with_callback(
                "click",
                listener.closure.as_ref().unchecked_ref(),
            );
        }
    }

    fn bind_content_ended(&mut self) {
        let Some(video) = self.content_video() else {
            return;
        };
        let dispatcher = self.dispatcher.clone();
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            dispatcher.send(Message::ContentEnded);
        }) as Box<dyn FnMut(Event)>);
        if let Some(previous) = self.ended.take() {
            let _ = video
                .remove_event_listener_with_callback("ended", previous.as_ref().unchecked_ref());
        }
        if video
            .add_event_listener_with_callback("ended", closure.as_ref().unchecked_ref())
            .is_ok()
        {
            self.ended = Some(closure);
        }
    }

    fn detach(&mut self, role: UiRole) -> bool {
        let Some(el) = self.elements.get(role) else {
            return false;
        };
        let Some(parent) = el.parent_node() else {
            return false;
        };
        parent.remove_child(&el).is_ok()
    }

    fn rendered_size(&self, role: UiRole) -> (u32, u32) {
        let Some(el) = self.elements.get(role) else {
            return (0, 0);
        };
        (
            u32::try_from(el.client_width()).unwrap_or(0),
            u32::try_from(el.client_height()).unwrap_or(0),
        )
    }

    fn load_content(&mut self) {
        if let Some(video) = self.content_video() {
            video.load();
        }
    }

    fn play_content(&mut self) {
        if let Some(video) = self.content_video() {
            // Autoplay refusals reject the promise; the user can still press play.
            let _ = video.play();
        }
    }

    fn pause_content(&mut self) {
        if let Some(video) = self.content_video() {
            let _ = video.pause();
        }
    }
}

impl Drop for DomPage {
    fn drop(&mut self) {
        for listener in self.clicks.drain(..) {
            if let Some(el) = self.elements.get(listener.role) {
                let _ = el.remove_event_listener_with_callback(
                    "click",
                    listener.closure.as_ref().unchecked_ref(),
                );
            }
        }
        if let (Some(video), Some(closure)) = (self.content_video(), self.ended.take()) {
            let _ = video.remove_event_listener_with_callback("ended", closure.as_ref().unchecked_ref());
        }
    }
}
