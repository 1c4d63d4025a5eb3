//! Fulfillment pipeline stage vocabulary.
//!
//! Every order sits at one of six fixed stages, from intake preparation to
//! completed fulfillment. The remote order API encodes the stage as an
//! opaque status token; the dashboard displays the German stage name. This
//! module is the single bidirectional translation point between the three
//! representations (stage index, remote token, display label), driven
//! entirely by static tables so that adding a stage never touches call
//! sites.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur during stage lookups.
#[derive(Debug, Error)]
pub enum StageError {
	/// Error that occurs when a stage index is outside the six defined
	/// stages. This signals a programming error, not bad remote data.
	#[error("Invalid stage index: {0}")]
	InvalidIndex(usize),
}

/// Position of an order in the six-stage fulfillment pipeline.
///
/// The discriminant order is the pipeline order; `PipelineStage::Completed`
/// is the terminal stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PipelineStage {
	/// The insole is being prepared.
	Preparation,
	/// The insole is in production.
	Production,
	/// The insole is being packaged.
	Packaging,
	/// The insole is ready for pickup.
	ReadyForPickup,
	/// The insole has been shipped.
	Shipped,
	/// The order is done.
	Completed,
}

/// One row of the canonical vocabulary table.
struct StageEntry {
	stage: PipelineStage,
	token: &'static str,
	label: &'static str,
}

/// Canonical vocabulary, ordered by pipeline position.
///
/// The tokens must match the remote system byte for byte.
const STAGES: [StageEntry; 6] = [
	StageEntry {
		stage: PipelineStage::Preparation,
		token: "Einlage_vorbereiten",
		label: "Einlage vorbereiten",
	},
	StageEntry {
		stage: PipelineStage::Production,
		token: "Einlage_in_Fertigung",
		label: "Einlage in Fertigung",
	},
	StageEntry {
		stage: PipelineStage::Packaging,
		token: "Einlage_verpacken",
		label: "Einlage verpacken",
	},
	StageEntry {
		stage: PipelineStage::ReadyForPickup,
		token: "Einlage_Abholbereit",
		label: "Einlage Abholbereit",
	},
	StageEntry {
		stage: PipelineStage::Shipped,
		token: "Einlage_versandt",
		label: "Einlage versandt",
	},
	StageEntry {
		stage: PipelineStage::Completed,
		token: "Ausgeführte_Einlagen",
		label: "Ausgeführte Einlagen",
	},
];

/// Legacy tokens still present in older order records.
///
/// "Sarted" is a typo shipped in historic data and must keep resolving.
const LEGACY_TOKENS: [(&str, PipelineStage); 8] = [
	("Started", PipelineStage::Preparation),
	("Sarted", PipelineStage::Preparation),
	("In Progress", PipelineStage::Production),
	("Packaging", PipelineStage::Packaging),
	("Ready for Pickup", PipelineStage::ReadyForPickup),
	("Shipped", PipelineStage::Shipped),
	("Completed", PipelineStage::Completed),
	("Delivered", PipelineStage::Completed),
];

impl PipelineStage {
	/// Number of defined stages.
	pub const COUNT: usize = STAGES.len();

	/// Returns the stage at the given pipeline index.
	///
	/// Fails with [`StageError::InvalidIndex`] outside `[0, 5]`; callers
	/// passing an out-of-range index have a logic bug, so this is never
	/// papered over with a default.
	pub fn from_index(index: usize) -> Result<Self, StageError> {
		STAGES
			.get(index)
			.map(|entry| entry.stage)
			.ok_or(StageError::InvalidIndex(index))
	}

	/// Resolves a remote status token to its stage.
	///
	/// Accepts the canonical tokens and the legacy synonyms. Unrecognized
	/// tokens degrade to the first stage so the order stays workable; the
	/// raw token is kept by the caller for display.
	pub fn from_token(token: &str) -> Self {
		match Self::lookup_token(token) {
			Some(stage) => stage,
			None => {
				tracing::warn!("Unknown order status token '{}', defaulting to first stage", token);
				PipelineStage::Preparation
			}
		}
	}

	/// Exact table lookup without the defensive default.
	pub fn lookup_token(token: &str) -> Option<Self> {
		STAGES
			.iter()
			.find(|entry| entry.token == token)
			.map(|entry| entry.stage)
			.or_else(|| {
				LEGACY_TOKENS
					.iter()
					.find(|(legacy, _)| *legacy == token)
					.map(|(_, stage)| *stage)
			})
	}

	/// The pipeline index of this stage.
	pub fn index(self) -> usize {
		self as usize
	}

	/// The canonical remote status token for this stage.
	pub fn token(self) -> &'static str {
		STAGES[self.index()].token
	}

	/// The German display label for this stage.
	pub fn label(self) -> &'static str {
		STAGES[self.index()].label
	}

	/// The following stage, or `None` at the end of the pipeline.
	pub fn next(self) -> Option<Self> {
		STAGES.get(self.index() + 1).map(|entry| entry.stage)
	}

	/// The preceding stage, or `None` at the start of the pipeline.
	pub fn previous(self) -> Option<Self> {
		self.index().checked_sub(1).map(|i| STAGES[i].stage)
	}

	/// Whether this stage is the terminal one.
	pub fn is_final(self) -> bool {
		matches!(self, PipelineStage::Completed)
	}

	/// Whether orders at this stage belong in the prioritized work queue.
	///
	/// Everything short of the terminal stage counts as active fulfillment.
	pub fn is_prioritized(self) -> bool {
		!self.is_final()
	}
}

impl fmt::Display for PipelineStage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.label())
	}
}

/// Returns the German display label for a remote status token.
///
/// Unrecognized tokens are returned verbatim so unknown states remain
/// visible in the dashboard instead of disappearing.
pub fn display_label_for_token(token: &str) -> &str {
	match PipelineStage::lookup_token(token) {
		Some(stage) => stage.label(),
		None => token,
	}
}

/// Whether a remote status token marks an order as prioritized.
///
/// True for tokens resolving to the five active-fulfillment stages, false
/// for the terminal stage and for tokens the table does not know.
pub fn is_prioritized_token(token: &str) -> bool {
	PipelineStage::lookup_token(token).is_some_and(|stage| stage.is_prioritized())
}
