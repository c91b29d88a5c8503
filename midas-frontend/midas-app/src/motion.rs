//! Declarative entrance, pointer and loop animations.
//!
//! Timings are plain data rendered into inline `transition`/`transform` styles.
//! The browser does the interpolation, the components only flip between the
//! initial pose and the resting pose.
use cfg_if::cfg_if;
use leptos::{html::Div, prelude::*};

/// A visual state an element can be animated between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    /// Horizontal offset in px.
    pub x: f32,
    /// Vertical offset in px.
    pub y: f32,
    pub scale: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub const HIDDEN: Pose = Pose {
        opacity: 0.0,
        ..Pose::REST
    };

    pub const fn hidden_below(y: f32) -> Pose {
        Pose { y, ..Pose::HIDDEN }
    }

    pub const fn hidden_left(x: f32) -> Pose {
        Pose { x: -x, ..Pose::HIDDEN }
    }

    pub const fn hidden_scaled(scale: f32) -> Pose {
        Pose {
            scale,
            ..Pose::HIDDEN
        }
    }

    pub const fn scaled(scale: f32) -> Pose {
        Pose {
            scale,
            ..Pose::REST
        }
    }

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

/// A one-shot transition from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub from: Pose,
    pub to: Pose,
    /// Seconds.
    pub duration: f32,
    /// Seconds.
    pub delay: f32,
}

impl Motion {
    pub const fn enter(from: Pose, duration: f32) -> Self {
        Self {
            from,
            to: Pose::REST,
            duration,
            delay: 0.0,
        }
    }

    pub const fn delayed(self, delay: f32) -> Self {
        Self { delay, ..self }
    }

    pub fn transition(&self) -> String {
        format!(
            "transition: opacity {d}s ease-out {w}s, transform {d}s ease-out {w}s;",
            d = self.duration,
            w = self.delay
        )
    }

    /// Inline style for the element, `active` selects the target pose.
    pub fn style(&self, active: bool) -> String {
        let pose = if active { self.to } else { self.from };
        format!("{} {}", pose.css(), self.transition())
    }
}

/// Entrance timings used across the page.
pub mod timing {
    use super::{Motion, Pose};

    pub const FEATURE_CARD: Motion = Motion::enter(Pose::hidden_below(20.0), 0.5);
    /// Added per card index to [`FEATURE_CARD`]'s delay.
    pub const FEATURE_CARD_STAGGER: f32 = 0.1;

    pub const HERO_BADGE: Motion = Motion::enter(Pose::hidden_scaled(0.9), 0.8);
    pub const HERO_HEADLINE: Motion = Motion::enter(Pose::hidden_below(30.0), 0.8).delayed(0.2);
    pub const HERO_COPY: Motion = Motion::enter(Pose::HIDDEN, 0.8).delayed(0.4);
    pub const HERO_ACTIONS: Motion = Motion::enter(Pose::hidden_below(20.0), 0.8).delayed(0.6);

    pub const GAMING_COPY: Motion = Motion::enter(Pose::hidden_left(50.0), 0.8);
    pub const GAMING_WINDOW: Motion = Motion::enter(Pose::hidden_scaled(0.95), 0.8);

    pub fn feature_card(index: usize) -> Motion {
        FEATURE_CARD.delayed(index as f32 * FEATURE_CARD_STAGGER)
    }
}

/// Next visibility state of a scroll reveal.
///
/// With `once` set a shown element stays shown no matter how often it leaves
/// the viewport again.
pub fn reveal_step(shown: bool, visible: bool, once: bool) -> bool {
    match (shown, once) {
        (true, true) => true,
        _ => visible,
    }
}

/// Flips to `true` once the page is live in the browser.
///
/// Stays `false` while rendering on the server, so the markup ships with the
/// initial pose and the transition plays after hydration.
pub fn use_mount_motion() -> Signal<bool> {
    let (entered, set_entered) = signal(false);
    Effect::new(move |_| set_entered.set(true));
    entered.into()
}

/// Whether the element behind `target` has scrolled into view, latched by
/// [`reveal_step`]. Always `false` on the server.
pub fn use_scroll_reveal(target: NodeRef<Div>, once: bool) -> Signal<bool> {
    let (shown, set_shown) = signal(false);
    cfg_if! {
        if #[cfg(feature = "hydrate")] {
            let visible = leptos_use::use_element_visibility(target);
            Effect::new(move |_| {
                let visible = visible.get();
                let next = reveal_step(shown.get_untracked(), visible, once);
                if next != shown.get_untracked() {
                    set_shown.set(next);
                }
            });
        } else {
            let _ = (target, once, set_shown);
        }
    }
    shown.into()
}

/// Pointer feedback poses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    pub hover: Pose,
    pub press: Pose,
    /// Seconds.
    pub duration: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerState {
    #[default]
    Idle,
    Hover,
    Pressed,
}

impl Gesture {
    /// Call to action buttons grow a little on hover and sink on press.
    pub const BUTTON: Gesture = Gesture {
        hover: Pose::scaled(1.02),
        press: Pose::scaled(0.98),
        duration: 0.2,
    };

    /// Project cards lift towards the pointer.
    pub const CARD_LIFT: Gesture = Gesture {
        hover: Pose {
            y: -4.0,
            ..Pose::scaled(1.02)
        },
        press: Pose {
            y: -4.0,
            ..Pose::scaled(1.02)
        },
        duration: 0.2,
    };

    pub fn pose(&self, state: PointerState) -> Pose {
        match state {
            PointerState::Idle => Pose::REST,
            PointerState::Hover => self.hover,
            PointerState::Pressed => self.press,
        }
    }

    pub fn style(&self, state: PointerState) -> String {
        let pose = self.pose(state);
        format!(
            "transform: translate({}px, {}px) scale({}); transition: transform {}s ease-out;",
            pose.x, pose.y, pose.scale, self.duration
        )
    }
}

/// Pointer tracking for an element using [`Gesture`] styles.
#[derive(Clone, Copy)]
pub struct PointerTracker {
    pub state: ReadSignal<PointerState>,
    set_state: WriteSignal<PointerState>,
}

impl PointerTracker {
    pub fn new() -> Self {
        let (state, set_state) = signal(PointerState::Idle);
        Self { state, set_state }
    }

    pub fn enter(&self) {
        self.set_state.set(PointerState::Hover);
    }

    pub fn leave(&self) {
        self.set_state.set(PointerState::Idle);
    }

    pub fn press(&self) {
        self.set_state.set(PointerState::Pressed);
    }

    /// Releasing the pointer over the element goes back to hover.
    pub fn release(&self) {
        self.set_state.update(|state| {
            if *state == PointerState::Pressed {
                *state = PointerState::Hover;
            }
        });
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// An infinite decorative keyframe loop defined in `style/tailwind.css`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Loop {
    pub keyframes: &'static str,
    /// Peak displacement handed to the keyframes through `--loop-distance`.
    pub distance_px: f32,
    /// Seconds per cycle.
    pub period: f32,
}

impl Loop {
    pub const SCROLL_HINT: Loop = Loop {
        keyframes: "midas-bob",
        distance_px: 10.0,
        period: 2.0,
    };

    pub const STATUS_PULSE: Loop = Loop {
        keyframes: "midas-pulse",
        distance_px: 0.0,
        period: 2.0,
    };

    pub fn style(&self) -> String {
        format!(
            "--loop-distance: {}px; animation: {} {}s ease-in-out infinite;",
            self.distance_px, self.keyframes, self.period
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reveal_once_never_replays() {
        let mut shown = false;
        for visible in [false, true, false, true, false, false] {
            shown = reveal_step(shown, visible, true);
        }
        assert!(shown);
    }

    #[test]
    fn reveal_without_once_follows_visibility() {
        assert!(!reveal_step(false, false, false));
        assert!(reveal_step(false, true, false));
        assert!(!reveal_step(true, false, false));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn server_renders_initial_pose() {
        Owner::new().with(|| {
            assert!(!use_mount_motion().get_untracked());
            assert!(!use_scroll_reveal(NodeRef::new(), true).get_untracked());
        });
    }

    #[test]
    fn hidden_before_first_view() {
        assert!(!reveal_step(false, false, true));
    }

    #[test]
    fn feature_card_stagger() {
        let third = timing::feature_card(2);
        assert_eq!(third.duration, 0.5);
        assert!((third.delay - 0.2).abs() < f32::EPSILON);
        assert_eq!(third.from.y, 20.0);
        assert_eq!(third.from.opacity, 0.0);
        assert_eq!(third.to, Pose::REST);
    }

    #[test]
    fn hero_stagger_order() {
        let delays = [
            timing::HERO_BADGE.delay,
            timing::HERO_HEADLINE.delay,
            timing::HERO_COPY.delay,
            timing::HERO_ACTIONS.delay,
        ];
        assert_eq!(delays, [0.0, 0.2, 0.4, 0.6]);
    }

    #[test]
    fn motion_style() {
        let motion = timing::FEATURE_CARD.delayed(0.3);
        assert_eq!(
            motion.style(false),
            "opacity: 0; transform: translate(0px, 20px) scale(1); \
             transition: opacity 0.5s ease-out 0.3s, transform 0.5s ease-out 0.3s;"
        );
        assert!(motion
            .style(true)
            .starts_with("opacity: 1; transform: translate(0px, 0px) scale(1);"));
    }

    #[test]
    fn gaming_copy_slides_from_left() {
        assert_eq!(timing::GAMING_COPY.from.x, -50.0);
        assert_eq!(timing::GAMING_WINDOW.from.scale, 0.95);
    }

    #[test]
    fn button_gesture() {
        let gesture = Gesture::BUTTON;
        assert_eq!(gesture.pose(PointerState::Idle).scale, 1.0);
        assert_eq!(gesture.pose(PointerState::Hover).scale, 1.02);
        assert_eq!(gesture.pose(PointerState::Pressed).scale, 0.98);
        assert_eq!(Gesture::CARD_LIFT.pose(PointerState::Hover).y, -4.0);
    }

    #[test]
    fn loop_style() {
        assert_eq!(
            Loop::SCROLL_HINT.style(),
            "--loop-distance: 10px; animation: midas-bob 2s ease-in-out infinite;"
        );
    }
}
