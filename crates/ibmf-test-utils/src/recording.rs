//! A glyph provider that records every call made to it.
//!
//! Wraps a real provider and forwards to it, so layout behaves exactly as
//! with the inner provider while tests inspect what was asked.

use ibmf_text::{
    FaceIndex, FaceMetrics, GlyphCode, GlyphLigKern, GlyphProvider, GlyphRef, LigKernOutcome,
};
use parking_lot::Mutex;

/// A recorded provider call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderCall {
    Translate(char),
    FaceMetrics(FaceIndex),
    Glyph {
        face: FaceIndex,
        code: GlyphCode,
    },
    LigKern {
        face: FaceIndex,
        first: GlyphCode,
        next: GlyphCode,
    },
    GlyphLigKern {
        face: FaceIndex,
        code: GlyphCode,
    },
}

/// Call-recording wrapper around a provider.
///
/// Provider methods take `&self`, so calls are recorded through a
/// `Mutex<Vec<ProviderCall>>`.
///
/// ```rust
/// use ibmf_test_utils::{RecordingProvider, sample_font};
/// use ibmf_text::TextLayout;
///
/// let provider = RecordingProvider::new(sample_font());
/// let layout = TextLayout::new(&provider, 0).unwrap();
/// layout.measure("AB");
///
/// assert_eq!(provider.count_lig_kern(), 1);
/// ```
pub struct RecordingProvider<P> {
    inner: P,
    calls: Mutex<Vec<ProviderCall>>,
}

impl<P: GlyphProvider> RecordingProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    fn record(&self, call: ProviderCall) {
        self.calls.lock().push(call);
    }

    /// Snapshot of the calls so far.
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    pub fn count_glyph_fetches(&self) -> usize {
        self.count(|c| matches!(c, ProviderCall::Glyph { .. }))
    }

    pub fn count_lig_kern(&self) -> usize {
        self.count(|c| matches!(c, ProviderCall::LigKern { .. }))
    }

    /// Number of fetches of one glyph code.
    pub fn count_fetches_of(&self, code: GlyphCode) -> usize {
        self.count(|c| matches!(c, ProviderCall::Glyph { code: fetched, .. } if *fetched == code))
    }

    fn count(&self, pred: impl Fn(&ProviderCall) -> bool) -> usize {
        self.calls.lock().iter().filter(|c| pred(c)).count()
    }
}

impl<P: GlyphProvider> GlyphProvider for RecordingProvider<P> {
    fn translate(&self, ch: char) -> GlyphCode {
        self.record(ProviderCall::Translate(ch));
        self.inner.translate(ch)
    }

    fn face_metrics(&self, face: FaceIndex) -> Option<FaceMetrics> {
        self.record(ProviderCall::FaceMetrics(face));
        self.inner.face_metrics(face)
    }

    fn glyph(&self, face: FaceIndex, code: GlyphCode) -> Option<GlyphRef> {
        self.record(ProviderCall::Glyph { face, code });
        self.inner.glyph(face, code)
    }

    fn lig_kern(&self, face: FaceIndex, first: GlyphCode, next: GlyphCode) -> LigKernOutcome {
        self.record(ProviderCall::LigKern { face, first, next });
        self.inner.lig_kern(face, first, next)
    }

    fn glyph_lig_kern(&self, face: FaceIndex, code: GlyphCode) -> Option<GlyphLigKern> {
        self.record(ProviderCall::GlyphLigKern { face, code });
        self.inner.glyph_lig_kern(face, code)
    }
}
