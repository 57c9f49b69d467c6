//! Core domain types for ConceptForge: the Concept Document aggregate, its
//! screenplay sum type, shape migration for older document revisions, the
//! data-quality audit, the presentation projection, and lossless export.
//!
//! Everything in this crate is pure: no IO, no clocks, no network.

pub mod document;
pub mod export;
pub mod migrate;
pub mod render;
pub mod script;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_support;

pub use document::{
    AssetCategory, AssetCreationPipeline, AssetPipelineDetails, AudioDesign, BossFight,
    BossMechanics, Character, CinematicCameraSystem, CompanionCommands, ConceptArtPrompt,
    ConceptDocument, CoreGameVision, CoreSystem, DisplayKey, EnemyAi, EnemyFaction, EngineChoice,
    Equipment, GameplayLoop, InventorySystem, KeyTrack, LevelBlueprint, Location, MainMenu,
    Mission, MultiplayerModule, Narrative, QaBuildDeploymentPlan, SkillBranch, SkillTree,
    SoundtrackMoodboard, TechnicalArchitecture, UiUxDesign, Villain, VisualStyle, VoiceLine,
    Weapon, WeaponUpgradeTree,
};
pub use migrate::migrate_to_current;
pub use render::{render_document, render_part, Block, Section};
pub use script::{Screenplay, ScriptPart};
pub use validate::{audit, Defect};
