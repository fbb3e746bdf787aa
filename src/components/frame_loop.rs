use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Runs `frame` once per display refresh until stopped or dropped.
pub struct FrameLoop {
	callback: FrameCallback,
	pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
	pub fn start(mut frame: impl FnMut() + 'static) -> Result<Self, JsValue> {
		let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let pending = Rc::new(Cell::new(None));

		let (callback_inner, pending_inner) = (Rc::downgrade(&callback), pending.clone());
		*callback.borrow_mut() = Some(Closure::new(move || {
			pending_inner.set(None);
			frame();
			let Some(callback) = callback_inner.upgrade() else {
				return;
			};
			if let (Some(cb), Some(window)) = (&*callback.borrow(), web_sys::window()) {
				pending_inner.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
			}
		}));
		if let Some(ref cb) = *callback.borrow() {
			pending.set(Some(window.request_animation_frame(cb.as_ref().unchecked_ref())?));
		}

		Ok(Self { callback, pending })
	}

	/// Cancels the scheduled frame and releases the callback. Must not be
	/// called from inside `frame`.
	pub fn stop(&self) {
		if let (Some(id), Some(window)) = (self.pending.take(), web_sys::window()) {
			let _ = window.cancel_animation_frame(id);
		}
		self.callback.borrow_mut().take();
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.stop();
	}
}
