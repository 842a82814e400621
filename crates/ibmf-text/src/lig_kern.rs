//! Ligature/kerning programs.
//!
//! Every glyph may own a program: a run of consecutive steps in the face's
//! step table, starting at the glyph's `lig_kern_pgm_index` and ending at the
//! first step flagged `stop`. A step matches on the code of the following
//! glyph and either substitutes a ligature or yields a kern value.

use ibmf_core::Fix16;

use crate::glyph::GlyphCode;
use crate::kern_table::KernEntry;
use crate::provider::{FaceIndex, GlyphProvider};

/// Default upper bound on chained ligature substitutions.
pub const MAX_LIG_KERN_CHAIN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LigKernAction {
    /// Replace the pair with this glyph.
    Ligature(GlyphCode),
    /// Adjust the spacing between the pair.
    Kern(Fix16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LigKernStep {
    pub next_glyph: GlyphCode,
    pub action: LigKernAction,
    /// Last step of the program.
    pub stop: bool,
}

impl LigKernStep {
    pub fn ligature(next_glyph: GlyphCode, replacement: GlyphCode) -> Self {
        Self {
            next_glyph,
            action: LigKernAction::Ligature(replacement),
            stop: false,
        }
    }

    pub fn kern(next_glyph: GlyphCode, kern: Fix16) -> Self {
        Self {
            next_glyph,
            action: LigKernAction::Kern(kern),
            stop: false,
        }
    }

    pub fn stop(mut self) -> Self {
        self.stop = true;
        self
    }
}

/// Result of a single program lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LigKernOutcome {
    Ligature(GlyphCode),
    Kern(Fix16),
    NoMatch,
}

/// The steps of one program, from its start to its stop step inclusive.
///
/// A program running off the end of the table ends with the table.
pub fn program_at(steps: &[LigKernStep], index: usize) -> &[LigKernStep] {
    let Some(tail) = steps.get(index..) else {
        return &[];
    };
    match tail.iter().position(|s| s.stop) {
        Some(end) => &tail[..=end],
        None => tail,
    }
}

/// First step of `program` matching `next`.
pub fn lookup(program: &[LigKernStep], next: GlyphCode) -> LigKernOutcome {
    program
        .iter()
        .find(|step| step.next_glyph == next)
        .map(|step| match step.action {
            LigKernAction::Ligature(code) => LigKernOutcome::Ligature(code),
            LigKernAction::Kern(kern) => LigKernOutcome::Kern(kern),
        })
        .unwrap_or(LigKernOutcome::NoMatch)
}

/// Outcome of walking a lig/kern chain for a glyph pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainResult {
    /// Glyph that ends up following the first one. Differs from the
    /// requested second glyph when a ligature was substituted.
    pub glyph: GlyphCode,
    /// Explicit kern for the final pair, if the program has one.
    pub kern: Option<Fix16>,
}

impl ChainResult {
    fn no_match(glyph: GlyphCode) -> Self {
        Self { glyph, kern: None }
    }

    pub fn is_ligature(&self, second: GlyphCode) -> bool {
        self.glyph != second
    }
}

/// Walk `first`'s program against `second`, following ligature
/// substitutions for at most `max_steps` lookups.
///
/// A chain that is still substituting after `max_steps` lookups is treated as
/// no match at all, so cyclic programs terminate.
pub fn resolve_chain<P: GlyphProvider + ?Sized>(
    provider: &P,
    face: FaceIndex,
    first: GlyphCode,
    second: GlyphCode,
    max_steps: usize,
) -> ChainResult {
    let mut code = second;
    for _ in 0..max_steps {
        match provider.lig_kern(face, first, code) {
            LigKernOutcome::Ligature(replacement) => code = replacement,
            LigKernOutcome::Kern(kern) => {
                return ChainResult {
                    glyph: code,
                    kern: Some(kern),
                };
            }
            LigKernOutcome::NoMatch => return ChainResult::no_match(code),
        }
    }

    tracing::warn!(
        "Lig/kern chain for glyphs {} + {} exceeded {} steps, ignoring it",
        first,
        second,
        max_steps
    );
    ChainResult::no_match(second)
}

/// A ligature entry of a glyph program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LigStep {
    pub next_glyph: GlyphCode,
    pub replacement: GlyphCode,
}

/// A kern entry of a glyph program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernStep {
    pub next_glyph: GlyphCode,
    pub kern: Fix16,
}

/// A glyph program split into its ligature and kern entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphLigKern {
    pub lig_steps: Vec<LigStep>,
    pub kern_steps: Vec<KernStep>,
}

impl GlyphLigKern {
    pub fn from_program(program: &[LigKernStep]) -> Self {
        let mut out = Self::default();
        for step in program {
            match step.action {
                LigKernAction::Ligature(replacement) => out.lig_steps.push(LigStep {
                    next_glyph: step.next_glyph,
                    replacement,
                }),
                LigKernAction::Kern(kern) => out.kern_steps.push(KernStep {
                    next_glyph: step.next_glyph,
                    kern,
                }),
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.lig_steps.is_empty() && self.kern_steps.is_empty()
    }

    /// Kern steps as table rows for the glyph owning this program.
    pub fn kern_entries(&self, glyph: GlyphCode) -> Vec<KernEntry> {
        self.kern_steps
            .iter()
            .map(|step| KernEntry::new(glyph, step.next_glyph, step.kern))
            .collect()
    }
}
