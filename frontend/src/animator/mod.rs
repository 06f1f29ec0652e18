//! Scroll-driven visibility animations.
//!
//! Sections register with one shared [`ViewportObserver`] through
//! [`use_in_view`]. Each section runs a [`SectionMachine`]: entering the
//! viewport flips `in_view` (the immediate fade) and arms the delayed reveal
//! stages, leaving cancels them unless the section triggers only once.

pub mod geometry;
pub mod hooks;
pub mod observer;
pub mod section;

pub use hooks::{use_in_view, ViewportProvider};
pub use section::SectionConfig;

/// Concern/solution columns: trigger as early as possible.
pub const CONCERNS: SectionConfig = SectionConfig::once(0.05, -10.0);
/// Ordinary content blocks.
pub const BLOCK: SectionConfig = SectionConfig::once(0.2, -50.0);
/// Large blocks that should start animating a little earlier.
pub const WIDE_BLOCK: SectionConfig = SectionConfig::once(0.1, -50.0);
/// Benefit cards with a single blurred image swap.
pub const SINGLE_REVEAL: SectionConfig = SectionConfig::repeating(0.3).with_reveal(&[1000]);
/// Benefit cards with two staggered image swaps.
pub const STAGGERED_REVEAL: SectionConfig = SectionConfig::repeating(0.3).with_reveal(&[1000, 3500]);

const FADE_BASE: &str = "transition-all ease-out";

/// How far a hidden block sits below its final position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeOffset {
    Short,
    Long,
}

/// Tailwind classes for the opacity/translate fade-in of a section.
pub fn fade_in_up(in_view: bool, duration_ms: u32, offset: FadeOffset) -> String {
    let hidden = match offset {
        FadeOffset::Short => "opacity-0 translate-y-10",
        FadeOffset::Long => "opacity-0 translate-y-20",
    };
    let state = if in_view { "opacity-100 translate-y-0" } else { hidden };
    format!("{FADE_BASE} duration-{duration_ms} {state}")
}

/// Inline style for a blurred overlay image that animates in once its stage fires.
pub fn blur_reveal_style(revealed: bool) -> &'static str {
    if revealed {
        "animation: blurReveal 3s ease-in-out forwards;"
    } else {
        "animation: none;"
    }
}
