// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fire-and-forget requests to audio and visual collaborators.

use crate::sample::SlashSpan;

/// Sounds the slash pipeline asks the host to play.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// A target was hit for the first time during one pointer move.
    Hit,
    /// A target died.
    Kill,
}

/// Sink for side effects emitted while resolving a slash.
///
/// Every method is a request; nothing is returned and nothing is awaited.
/// The implementation is handed in by the caller rather than looked up from
/// ambient state.
pub trait SlashEffects {
    /// Requests a sound.
    fn play_sound(&mut self, cue: SoundCue);

    /// Requests sparks along a recovered span.
    fn emit_sparks_along(&mut self, span: SlashSpan);

    /// Requests a persistent cut mark along a recovered span.
    fn add_persistent_mark(&mut self, span: SlashSpan);
}

/// Discards every request.
impl SlashEffects for () {
    #[inline]
    fn play_sound(&mut self, _cue: SoundCue) {}

    #[inline]
    fn emit_sparks_along(&mut self, _span: SlashSpan) {}

    #[inline]
    fn add_persistent_mark(&mut self, _span: SlashSpan) {}
}
