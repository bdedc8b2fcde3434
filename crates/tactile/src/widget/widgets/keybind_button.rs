//! Key combination recorder.
//!
//! [`KeybindButton`] captures a key combination while focused. Keys are
//! tracked in two pieces of state: the insertion-ordered list of labels
//! seen this session and the set of labels currently held down. An idle
//! timer finalizes the capture; it starts at a 2 second grace period on
//! focus and drops to 200 ms once the first key arrives, restarting on
//! every distinct press or release.
//!
//! Finalization emits `finished` with the labels that are both seen and
//! still held, in first-press order. Losing focus cancels the capture
//! without emitting. A mouse press while at least one key is held
//! finalizes immediately.
//!
//! While capturing, a keyboard-bus filter suppresses key passthrough to the
//! surrounding UI; the filter and the timer are both released through RAII
//! on every exit path including drop.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tactile_core::{Object, ObjectId, Signal};

use crate::widget::{
    Element, InputContext, Key, KeyFilterGuard, OwnedTimer, VisualFlags, Widget, WidgetBase,
    WidgetEvent,
};

/// Idle timeout before any key has been pressed.
const GRACE_PERIOD: Duration = Duration::from_millis(2000);
/// Idle timeout after the first key, restarted on every press and release.
const SETTLE_PERIOD: Duration = Duration::from_millis(200);

/// A button that records a key combination while focused.
pub struct KeybindButton {
    /// Widget base.
    base: WidgetBase,

    /// Shared input context for the timer and the keyboard filter.
    ctx: Arc<InputContext>,

    /// Content shown while not capturing (and while the chord is empty).
    text: String,

    /// Labels seen this session, in first-press order, no duplicates.
    seen: Vec<String>,

    /// Labels currently held down.
    down: HashSet<String>,

    /// The idle finalization timer.
    timer: OwnedTimer,

    /// Passthrough suppression. `Some` means capturing.
    filter: Option<KeyFilterGuard>,

    /// Signal emitted with the recorded combination.
    pub finished: Signal<Vec<String>>,
}

impl KeybindButton {
    /// Create a new keybind button with the specified text.
    pub fn new(text: impl Into<String>, ctx: &Arc<InputContext>) -> Self {
        let base = WidgetBase::new();
        let timer = OwnedTimer::new(Arc::clone(ctx), base.object_id());
        Self {
            base,
            ctx: Arc::clone(ctx),
            text: text.into(),
            seen: Vec::new(),
            down: HashSet::new(),
            timer,
            filter: None,
            finished: Signal::new(),
        }
    }

    /// Get the button's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the button's text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.base.update();
    }

    /// Check if a capture session is active.
    pub fn is_capturing(&self) -> bool {
        self.filter.is_some()
    }

    /// The chord as it stands: labels seen this session, in press order.
    pub fn current_chord(&self) -> &[String] {
        &self.seen
    }

    // =========================================================================
    // Capture Session
    // =========================================================================

    /// The label a key contributes to the chord.
    ///
    /// Numpad keys keep their distinct `Numpad*` labels; everything else is
    /// the uppercased key name, so `1` and `Numpad1` never collide.
    fn chord_label(key: Key) -> String {
        if key.is_numpad() {
            key.name().to_string()
        } else {
            key.name().to_uppercase()
        }
    }

    fn begin_capture(&mut self) {
        if self.is_capturing() || !self.base.is_enabled() {
            return;
        }
        self.seen.clear();
        self.down.clear();
        self.timer.rearm(GRACE_PERIOD);
        // Suppress passthrough for every key while capturing.
        self.filter = Some(
            self.ctx
                .keyboard()
                .add_filter_scoped(|event| event.base.accept()),
        );
        self.base.set_focused(true);
        self.base.update();
        tracing::trace!(target: "tactile::widget", "key capture started");
    }

    /// Tear down the session without emitting.
    fn end_capture(&mut self) {
        self.seen.clear();
        self.down.clear();
        self.timer.cancel();
        self.filter = None;
        self.base.set_focused(false);
        self.base.update();
    }

    /// Emit the chord exactly once and tear down.
    fn finalize(&mut self) {
        if !self.is_capturing() {
            return;
        }
        let chord: Vec<String> = self
            .seen
            .iter()
            .filter(|label| self.down.contains(*label))
            .cloned()
            .collect();
        self.end_capture();
        tracing::trace!(target: "tactile::widget", ?chord, "key capture finished");
        self.finished.emit(chord);
    }

    fn handle_key_press(&mut self, key: Key) {
        let label = Self::chord_label(key);
        // A repeated press of a held key (keyboard autorepeat) is a
        // complete no-op: no state change and no timer restart.
        if self.down.contains(&label) {
            return;
        }
        if !self.seen.iter().any(|seen| seen == &label) {
            self.seen.push(label.clone());
        }
        self.down.insert(label);
        self.timer.rearm(SETTLE_PERIOD);
        self.base.update();
    }

    fn handle_key_release(&mut self, key: Key) -> bool {
        let label = Self::chord_label(key);
        if self.down.remove(&label) {
            self.timer.rearm(SETTLE_PERIOD);
            self.base.update();
            return true;
        }
        false
    }
}

impl Object for KeybindButton {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for KeybindButton {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::FocusIn(_) => {
                self.begin_capture();
                true
            }
            WidgetEvent::FocusOut(_) => {
                if self.is_capturing() {
                    // Losing focus cancels the capture; nothing is emitted.
                    tracing::trace!(target: "tactile::widget", "key capture cancelled");
                    self.end_capture();
                }
                true
            }
            WidgetEvent::KeyPress(e) => {
                if !self.is_capturing() {
                    return false;
                }
                let key = e.key;
                self.handle_key_press(key);
                event.accept();
                true
            }
            WidgetEvent::KeyRelease(e) => {
                if !self.is_capturing() {
                    return false;
                }
                let key = e.key;
                if self.handle_key_release(key) {
                    event.accept();
                    return true;
                }
                false
            }
            WidgetEvent::Timer(e) => {
                if self.timer.owns(e.id) {
                    self.finalize();
                    event.accept();
                    return true;
                }
                false
            }
            WidgetEvent::MousePress(_) => {
                if self.is_capturing() && !self.down.is_empty() {
                    self.finalize();
                    event.accept();
                    return true;
                }
                if !self.is_capturing() && self.base.is_enabled() {
                    self.begin_capture();
                    event.accept();
                    return true;
                }
                false
            }
            _ => false,
        }
    }

    fn build(&self) -> Element {
        let mut flags = VisualFlags::NONE;
        if !self.base.is_enabled() {
            flags |= VisualFlags::DISABLED;
        }
        if self.is_capturing() {
            flags |= VisualFlags::SELECTED;
        }

        let content = if self.is_capturing() && !self.seen.is_empty() {
            self.seen.join("+")
        } else {
            self.text.clone()
        };

        Element::Surface {
            flags,
            color: None,
            focusable: self.base.is_focusable(),
            children: vec![Element::Text(content)],
        }
    }
}

static_assertions::assert_impl_all!(KeybindButton: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{
        FocusInEvent, FocusOutEvent, FocusReason, KeyPressEvent, KeyReleaseEvent, MouseButton,
        MousePressEvent, TimerEvent,
    };
    use parking_lot::Mutex;

    fn focus() -> WidgetEvent {
        WidgetEvent::FocusIn(FocusInEvent::new(FocusReason::Mouse))
    }

    fn blur() -> WidgetEvent {
        WidgetEvent::FocusOut(FocusOutEvent::new(FocusReason::Mouse))
    }

    fn key_down(k: Key) -> WidgetEvent {
        WidgetEvent::KeyPress(KeyPressEvent::new(k))
    }

    fn key_up(k: Key) -> WidgetEvent {
        WidgetEvent::KeyRelease(KeyReleaseEvent::new(k))
    }

    fn finish_log(button: &KeybindButton) -> Arc<Mutex<Vec<Vec<String>>>> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let log_clone = log.clone();
        button.finished.connect(move |chord: &Vec<String>| {
            log_clone.lock().push(chord.clone());
        });
        log
    }

    /// Advance the context clock and deliver fired timers back to the widget.
    fn advance(ctx: &Arc<InputContext>, button: &mut KeybindButton, elapsed: Duration) {
        for (owner, id) in ctx.advance(elapsed) {
            if owner == button.object_id() {
                let mut event = WidgetEvent::Timer(TimerEvent::new(id));
                button.event(&mut event);
            }
        }
    }

    #[test]
    fn test_chord_finalizes_after_idle() {
        let ctx = InputContext::new();
        let mut button = KeybindButton::new("Bind", &ctx);
        let log = finish_log(&button);

        button.event(&mut focus());
        button.event(&mut key_down(Key::A));
        button.event(&mut key_down(Key::B));

        advance(&ctx, &mut button, Duration::from_millis(250));

        assert_eq!(*log.lock(), vec![vec!["A".to_string(), "B".to_string()]]);
        assert!(!button.is_capturing());
        // Finalize emits exactly once; more time changes nothing.
        advance(&ctx, &mut button, Duration::from_secs(5));
        assert_eq!(log.lock().len(), 1);
    }

    #[test]
    fn test_grace_period_before_first_key() {
        let ctx = InputContext::new();
        let mut button = KeybindButton::new("Bind", &ctx);
        let log = finish_log(&button);

        button.event(&mut focus());
        advance(&ctx, &mut button, Duration::from_millis(1500));
        assert!(button.is_capturing());

        advance(&ctx, &mut button, Duration::from_millis(600));
        assert!(!button.is_capturing());
        // No key was ever pressed; the chord is empty.
        assert_eq!(*log.lock(), vec![Vec::<String>::new()]);
    }

    #[test]
    fn test_autorepeat_does_not_restart_timer() {
        let ctx = InputContext::new();
        let mut button = KeybindButton::new("Bind", &ctx);
        let log = finish_log(&button);

        button.event(&mut focus());
        button.event(&mut key_down(Key::A));
        advance(&ctx, &mut button, Duration::from_millis(150));

        // Autorepeat press of the held key: full no-op, timer untouched.
        button.event(&mut key_down(Key::A));
        advance(&ctx, &mut button, Duration::from_millis(60));

        assert_eq!(*log.lock(), vec![vec!["A".to_string()]]);
    }

    #[test]
    fn test_release_restarts_timer_and_drops_key_from_chord() {
        let ctx = InputContext::new();
        let mut button = KeybindButton::new("Bind", &ctx);
        let log = finish_log(&button);

        button.event(&mut focus());
        button.event(&mut key_down(Key::A));
        button.event(&mut key_down(Key::B));
        advance(&ctx, &mut button, Duration::from_millis(150));

        // Releasing B restarts the settle timer and removes B from the
        // finalized chord (seen but no longer down).
        button.event(&mut key_up(Key::B));
        advance(&ctx, &mut button, Duration::from_millis(150));
        assert!(button.is_capturing());

        advance(&ctx, &mut button, Duration::from_millis(100));
        assert_eq!(*log.lock(), vec![vec!["A".to_string()]]);
    }

    #[test]
    fn test_all_released_finalizes_empty() {
        let ctx = InputContext::new();
        let mut button = KeybindButton::new("Bind", &ctx);
        let log = finish_log(&button);

        button.event(&mut focus());
        button.event(&mut key_down(Key::A));
        button.event(&mut key_up(Key::A));
        advance(&ctx, &mut button, Duration::from_millis(250));

        assert_eq!(*log.lock(), vec![Vec::<String>::new()]);
    }

    #[test]
    fn test_blur_cancels_without_emitting() {
        let ctx = InputContext::new();
        let mut button = KeybindButton::new("Bind", &ctx);
        let log = finish_log(&button);

        button.event(&mut focus());
        button.event(&mut key_down(Key::A));
        button.event(&mut blur());

        assert!(!button.is_capturing());
        assert_eq!(ctx.keyboard().filter_count(), 0);

        // The timer was cancelled; nothing fires later.
        advance(&ctx, &mut button, Duration::from_secs(5));
        assert!(log.lock().is_empty());
    }

    #[test]
    fn test_click_with_keys_down_finalizes_immediately() {
        let ctx = InputContext::new();
        let mut button = KeybindButton::new("Bind", &ctx);
        let log = finish_log(&button);

        button.event(&mut focus());
        button.event(&mut key_down(Key::ControlLeft));
        button.event(&mut key_down(Key::X));

        let mut click = WidgetEvent::MousePress(MousePressEvent::new(MouseButton::Left));
        assert!(button.event(&mut click));
        assert!(click.is_accepted());

        assert_eq!(
            *log.lock(),
            vec![vec!["CTRL".to_string(), "X".to_string()]]
        );
    }

    #[test]
    fn test_numpad_labels_distinct_from_digit_row() {
        let ctx = InputContext::new();
        let mut button = KeybindButton::new("Bind", &ctx);
        let log = finish_log(&button);

        button.event(&mut focus());
        button.event(&mut key_down(Key::Digit1));
        button.event(&mut key_down(Key::Numpad1));
        advance(&ctx, &mut button, Duration::from_millis(250));

        assert_eq!(
            *log.lock(),
            vec![vec!["1".to_string(), "Numpad1".to_string()]]
        );
    }

    #[test]
    fn test_passthrough_suppressed_while_capturing() {
        let ctx = InputContext::new();
        let mut button = KeybindButton::new("Bind", &ctx);

        button.event(&mut focus());
        let mut stray = KeyPressEvent::new(Key::W);
        assert!(ctx.dispatch_key_press(&mut stray));

        button.event(&mut blur());
        let mut stray = KeyPressEvent::new(Key::W);
        assert!(!ctx.dispatch_key_press(&mut stray));
    }

    #[test]
    fn test_drop_releases_timer_and_filter() {
        let ctx = InputContext::new();
        {
            let mut button = KeybindButton::new("Bind", &ctx);
            button.event(&mut focus());
            button.event(&mut key_down(Key::A));
            assert_eq!(ctx.keyboard().filter_count(), 1);
        }
        assert_eq!(ctx.keyboard().filter_count(), 0);
        assert!(ctx.advance(Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn test_live_chord_display() {
        let ctx = InputContext::new();
        let mut button = KeybindButton::new("Bind", &ctx);

        assert_eq!(
            button.build().surface_children().unwrap(),
            &[Element::Text("Bind".into())]
        );

        button.event(&mut focus());
        assert!(button.build().surface_flags().unwrap().has(VisualFlags::SELECTED));

        button.event(&mut key_down(Key::ControlLeft));
        button.event(&mut key_down(Key::S));
        assert_eq!(
            button.build().surface_children().unwrap(),
            &[Element::Text("CTRL+S".into())]
        );
    }
}
