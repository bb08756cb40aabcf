// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::{AdmissibleSet, CofaceIndex, ComplexLike, SpineReduction};

/// State of a [`CollapseEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollapseStatus {
    /// Admissible pairs remain; further steps perform elementary collapses.
    Collapsing,
    /// No admissible pair remains, even after a full rebuild. The complex is a
    /// spine. This state is terminal.
    Done,
}

/// Options of a [`CollapseEngine`].
///
/// The `Default` implementation sets no step budget and disables coface
/// verification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollapseConfig {
    /// Maximum number of steps performed by [`CollapseEngine::run`]. With
    /// `None`, the engine runs until it is done.
    pub maximum_steps: Option<usize>,
    /// If set, the coface index is checked against a from-scratch rebuild after
    /// every collapse, panicking on any inconsistency. This is very slow and
    /// intended for testing.
    pub verify_cofaces: bool,
}

impl CollapseConfig {
    /// Create a configuration with the given step budget and verification
    /// setting.
    pub fn new(maximum_steps: Option<usize>, verify_cofaces: bool) -> Self {
        Self {
            maximum_steps,
            verify_cofaces,
        }
    }
}

/// Counters describing the work done by a [`CollapseEngine`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollapseStats {
    /// Number of elementary collapses performed; each removes two cells.
    pub collapses: usize,
    /// Number of full rebuilds of the admissible set, including the initial
    /// one and the final one confirming that nothing is left to collapse.
    pub rebuilds: usize,
    /// Number of cells probed locally after a collapse.
    pub probes: usize,
    /// Number of cells that became admissible and were found by local probes.
    pub probed_pairs: usize,
}

/// Incremental reduction of a complex to its spine by elementary collapses.
///
/// The engine owns a working complex together with a [`CofaceIndex`] and an
/// [`AdmissibleSet`] derived from it. Each [`CollapseEngine::step`] removes the
/// least admissible pair `(principal, free_face)` from the complex and updates
/// the coface index for the removal. It then probes every face of the removed
/// cells and every remaining coface of those faces: only these cells can
/// become principal or gain a new free face. The admissible set therefore
/// always holds every admissible pair of the working complex, and the engine
/// collapses pairs in the same order as [`crate::NaiveSpine`].
///
/// When the admissible set runs empty it is rebuilt over the whole complex.
/// When that rebuild also finds nothing, the engine is
/// [`CollapseStatus::Done`] and the working complex is the spine.
///
/// The state is changed only through `step` (and `run`, which repeats it), so a
/// caller can drive the reduction incrementally, for instance to bound its
/// latency.
#[derive(Clone, Debug)]
pub struct CollapseEngine<C>
where
    C: ComplexLike,
{
    complex: C,
    cofaces: CofaceIndex<C::Cell>,
    admissible: AdmissibleSet<C::Cell>,
    config: CollapseConfig,
    stats: CollapseStats,
    status: CollapseStatus,
}

impl<C> CollapseEngine<C>
where
    C: ComplexLike,
{
    /// Prepare the reduction of `complex` with the default configuration.
    pub fn new(complex: C) -> Self {
        Self::with_config(complex, CollapseConfig::default())
    }

    /// Prepare the reduction of `complex`: build its coface index and seed the
    /// admissible set with a full rebuild.
    pub fn with_config(complex: C, config: CollapseConfig) -> Self {
        let cofaces = CofaceIndex::build(&complex);
        let mut engine = Self {
            complex,
            cofaces,
            admissible: AdmissibleSet::new(),
            config,
            stats: CollapseStats::default(),
            status: CollapseStatus::Collapsing,
        };

        engine.rebuild();
        debug!(
            cells = engine.complex.cell_count(),
            admissible = engine.admissible.len(),
            "Initialized collapse engine"
        );
        if engine.admissible.is_empty() {
            engine.finish();
        }

        engine
    }

    /// The working complex in its current state.
    pub fn complex(&self) -> &C {
        &self.complex
    }

    /// The coface index of the working complex.
    pub fn cofaces(&self) -> &CofaceIndex<C::Cell> {
        &self.cofaces
    }

    /// The admissible pairs currently known to the engine.
    pub fn admissible(&self) -> &AdmissibleSet<C::Cell> {
        &self.admissible
    }

    /// The configuration of the engine.
    pub fn config(&self) -> &CollapseConfig {
        &self.config
    }

    /// Counters of the work done so far.
    pub fn stats(&self) -> CollapseStats {
        self.stats
    }

    /// The current state of the engine.
    pub fn status(&self) -> CollapseStatus {
        self.status
    }

    /// Perform one elementary collapse, if the engine is not done. Returns the
    /// state after the step.
    pub fn step(&mut self) -> CollapseStatus {
        if self.status == CollapseStatus::Done {
            return CollapseStatus::Done;
        }

        let (principal, free_face) = self
            .admissible
            .pop_first()
            .expect("collapse engine has no admissible pair while collapsing");
        self.collapse(principal, free_face);

        if self.admissible.is_empty() {
            debug!(
                collapses = self.stats.collapses,
                "Admissible set exhausted; rebuilding"
            );
            let found = self.rebuild();
            if found == 0 {
                self.finish();
            } else {
                warn!(found, "Rebuild found admissible pairs missed by probing");
            }
        }

        self.status
    }

    /// Repeat [`CollapseEngine::step`] until the engine is done or the step
    /// budget of the configuration is exhausted. Returns the final state.
    pub fn run(&mut self) -> CollapseStatus {
        let mut steps = 0;
        while self.status == CollapseStatus::Collapsing {
            if self
                .config
                .maximum_steps
                .is_some_and(|maximum_steps| steps >= maximum_steps)
            {
                debug!(steps, "Step budget exhausted");
                break;
            }
            self.step();
            steps += 1;
        }
        self.status
    }

    /// Consume the engine and return the working complex.
    pub fn into_complex(self) -> C {
        self.complex
    }

    fn collapse(&mut self, principal: C::Cell, free_face: C::Cell) {
        assert!(
            self.cofaces.is_principal(&principal),
            "collapsing cell {principal:?} which is not principal"
        );
        assert!(
            self.cofaces.is_free_face_of(&free_face, &principal),
            "collapsing cell {principal:?} with {free_face:?} which is not a free face of it"
        );

        let principal_boundary = self.complex.cell_boundary(&principal);
        let free_face_boundary = self.complex.cell_boundary(&free_face);

        // The principal cell first: until it is gone, the free face is still
        // one of its faces.
        let removed = self.complex.remove_cell_unchecked(&principal)
            && self.complex.remove_cell_unchecked(&free_face);
        assert!(removed, "collapsed cells are not in the complex");

        self.cofaces.collapse(
            &principal,
            &principal_boundary,
            &free_face,
            &free_face_boundary,
        );
        self.stats.collapses += 1;
        trace!(?principal, ?free_face, "Collapsed pair");

        if self.config.verify_cofaces {
            if let Err(mismatch) = self.cofaces.verify(&self.complex) {
                panic!("coface index inconsistent after collapsing {principal:?}: {mismatch}");
            }
        }

        let mut affected = BTreeSet::new();
        for face in principal_boundary
            .iter()
            .filter(|face| **face != free_face)
            .chain(free_face_boundary.iter())
        {
            if let Some(cofaces) = self.cofaces.cofaces(face) {
                affected.extend(cofaces.iter().cloned());
            }
            affected.insert(face.clone());
        }

        for cell in &affected {
            self.stats.probes += 1;
            if self.admissible.probe(&self.cofaces, &self.complex, cell) {
                self.stats.probed_pairs += 1;
            }
        }
    }

    fn rebuild(&mut self) -> usize {
        self.stats.rebuilds += 1;
        self.admissible.rebuild(&self.cofaces, &self.complex)
    }

    fn finish(&mut self) {
        self.status = CollapseStatus::Done;
        info!(
            cells = self.complex.cell_count(),
            collapses = self.stats.collapses,
            rebuilds = self.stats.rebuilds,
            probed_pairs = self.stats.probed_pairs,
            "Reached spine"
        );
    }
}

/// Reduction to the spine by the incremental [`CollapseEngine`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IncrementalSpine {
    config: CollapseConfig,
}

impl IncrementalSpine {
    /// Create a reducer running the engine with `config`. If the configuration
    /// sets a step budget, the returned complex may not be fully reduced.
    pub fn new(config: CollapseConfig) -> Self {
        Self { config }
    }
}

impl SpineReduction for IncrementalSpine {
    fn reduce<C>(&self, complex: &C) -> C
    where
        C: ComplexLike + Clone,
    {
        let mut engine = CollapseEngine::with_config(complex.clone(), self.config.clone());
        engine.run();
        engine.into_complex()
    }
}

/// Compute the spine of `complex` by iterated elementary collapses, using the
/// incremental [`CollapseEngine`]. The input complex is left untouched.
///
/// The spine is face-closed, no larger than `complex`, and homotopy-equivalent
/// to it.
pub fn spine<C>(complex: &C) -> C
where
    C: ComplexLike + Clone,
{
    IncrementalSpine::default().reduce(complex)
}
