//! The Concept Document: a single large, immutable description of a fictional
//! game design, produced in one shot by a generative text service (or loaded
//! from the bundled fallback) and consumed read-only by presentation layers.
//!
//! Field names on the wire are camelCase; the serde attributes below are the
//! single source of truth for the canonical shape. Older shapes are lifted to
//! this one by [`crate::migrate::migrate_to_current`] before typed decoding.

use serde::{Deserialize, Serialize};

use crate::script::Screenplay;

/// The canonical Concept Document.
///
/// Required fields are present in every revision the system has ever emitted
/// (after migration). Optional fields are genuinely optional sections: absent
/// means "this concept does not include that section", and rendering must
/// simply skip them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptDocument {
    pub title: String,
    pub narrative: Narrative,
    pub gameplay_loop: GameplayLoop,
    pub visual_style: VisualStyle,
    pub locations: Vec<Location>,
    pub missions: Vec<Mission>,
    pub enemy_factions: Vec<EnemyFaction>,
    pub audio: AudioDesign,

    /// Entity collections that older revisions did not carry; they decode to
    /// empty rather than failing the whole document.
    #[serde(default)]
    pub characters: Vec<Character>,
    #[serde(default)]
    pub weapons: Vec<Weapon>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executive_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_roadmap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_game_vision: Option<CoreGameVision>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub villain: Option<Villain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_architecture: Option<TechnicalArchitecture>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enemy_ai: Option<EnemyAi>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_creation_pipeline: Option<AssetCreationPipeline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qa_build_deployment_plan: Option<QaBuildDeploymentPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_blueprints: Option<Vec<LevelBlueprint>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uiux: Option<UiUxDesign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_system: Option<InventorySystem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_tree: Option<SkillTree>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon_upgrade_tree: Option<WeaponUpgradeTree>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub companion_commands: Option<CompanionCommands>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boss_mechanics: Option<BossMechanics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept_art_prompts: Option<Vec<ConceptArtPrompt>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cinematic_camera_system: Option<CinematicCameraSystem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplayer_module: Option<MultiplayerModule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer_script: Option<Screenplay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_cinematic: Option<Screenplay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_voice_lines: Option<Vec<VoiceLine>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes_for_artists: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_authenticity_checklist: Option<String>,
}

/// High-level pitch of the whole game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreGameVision {
    pub style: String,
    pub world: String,
    pub tone: String,
    pub languages: String,
    pub primary_maps: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Narrative {
    pub main_storyline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_arc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical_fidelity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameplayLoop {
    pub core_loop: Vec<String>,
    pub unique_systems: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualStyle {
    pub art_style: String,
    pub color_palette: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub description: String,
}

/// A full level design treatment for one mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelBlueprint {
    pub title: String,
    pub time: String,
    pub vibe: String,
    pub mission_type: String,
    pub unique_mechanics: Vec<String>,
    pub key_scene: String,
}

/// A playable or featured character, detailed enough to brief a modeler and
/// a voice actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub name: String,
    pub title: String,
    pub role: String,
    pub personality: String,
    pub look: Vec<String>,
    pub signature_line: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub born: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battle_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backstory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Villain {
    pub codename: String,
    pub title: String,
    pub voice: String,
    pub accent: String,
    pub motivation: String,
    pub depth: String,
    pub style: Vec<String>,
    pub chilling_line: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub name: String,
    pub kind: String,
    pub description: String,
    pub three_d_reference: String,
    pub specs: String,
    pub sound_description: String,
    pub physics_specs: String,
    pub recoil_pattern: String,
    pub reload_animation: String,
    pub environmental_acoustics: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub name: String,
    pub kind: String,
    pub description: String,
    pub three_d_reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyFaction {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchy: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioDesign {
    pub moodboard: SoundtrackMoodboard,
    pub sound_effects: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundtrackMoodboard {
    pub instruments: Vec<String>,
    pub key_tracks: Vec<KeyTrack>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyTrack {
    pub title: String,
    pub description: String,
}

/// Engine choice and the core systems an engineering team would build first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalArchitecture {
    pub engine_choice: EngineChoice,
    pub core_systems: Vec<CoreSystem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineChoice {
    pub engine: String,
    pub reasoning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreSystem {
    pub name: String,
    pub description: String,
}

/// Per-category asset lists plus the conventions the art team works to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCreationPipeline {
    pub character_assets: AssetCategory,
    pub weapon_assets: AssetCategory,
    pub environment_assets: AssetCategory,
    pub vehicle_assets: AssetCategory,
    pub audio_assets: AssetCategory,
    pub pipeline_details: AssetPipelineDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCategory {
    pub description: String,
    pub asset_list: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPipelineDetails {
    pub naming_conventions: String,
    pub polycount_target: String,
    pub lod_levels: String,
    pub texture_map_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QaBuildDeploymentPlan {
    pub testing_protocols: String,
    pub optimization_guide: String,
    pub webgl_memory_guidelines: String,
    pub build_pipeline: String,
    pub post_launch_update_roadmap: String,
    pub performance_benchmarks: String,
}

/// Prose description of enemy combat behavior, written for an AI programmer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyAi {
    pub patrol_chase_engage_retreat: String,
    pub flanking_behavior: String,
    pub grenade_logic: String,
    pub suppressive_fire: String,
    pub noise_reaction: String,
    pub fear_morale_system: String,
    pub behavior_tree_diagram: String,
    pub ai_states_and_transitions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiUxDesign {
    pub style_language: Vec<String>,
    pub main_menu: MainMenu,
    pub in_game_hud: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainMenu {
    pub scene_description: String,
    pub buttons: Vec<String>,
    pub sfx: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySystem {
    pub categories: Vec<String>,
    pub dynamic_weight_system: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillTree {
    pub branches: Vec<SkillBranch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillBranch {
    pub name: String,
    pub philosophy: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponUpgradeTree {
    pub barrel_mods: Vec<String>,
    pub optics: Vec<String>,
    pub body_mods: Vec<String>,
    pub ammo_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionCommands {
    pub basic: Vec<String>,
    pub advanced: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BossMechanics {
    pub bosses: Vec<BossFight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BossFight {
    pub name: String,
    pub description: String,
    pub mechanics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_moment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptArtPrompt {
    pub title: String,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CinematicCameraSystem {
    pub conversation: String,
    pub combat: String,
    pub cutscenes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiplayerModule {
    pub co_op_mode: String,
    pub leaderboards: String,
    pub spectator_mode: String,
    pub lobby_system: String,
    pub netcode_structure: String,
    pub anti_cheat_basics: String,
}

/// One recorded voice line with its spoken language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceLine {
    pub character: String,
    pub language: String,
    pub line: String,
}

/// The human-facing identifier of a record inside a collection. Used by the
/// data-quality audit; records are keyed by name/title rather than by id, so
/// empty or duplicate keys are worth flagging.
pub trait DisplayKey {
    fn display_key(&self) -> &str;
}

impl DisplayKey for Location {
    fn display_key(&self) -> &str {
        &self.name
    }
}

impl DisplayKey for Mission {
    fn display_key(&self) -> &str {
        &self.title
    }
}

impl DisplayKey for LevelBlueprint {
    fn display_key(&self) -> &str {
        &self.title
    }
}

impl DisplayKey for Character {
    fn display_key(&self) -> &str {
        &self.name
    }
}

impl DisplayKey for Weapon {
    fn display_key(&self) -> &str {
        &self.name
    }
}

impl DisplayKey for Equipment {
    fn display_key(&self) -> &str {
        &self.name
    }
}

impl DisplayKey for EnemyFaction {
    fn display_key(&self) -> &str {
        &self.name
    }
}

impl DisplayKey for CoreSystem {
    fn display_key(&self) -> &str {
        &self.name
    }
}

impl DisplayKey for KeyTrack {
    fn display_key(&self) -> &str {
        &self.title
    }
}

impl DisplayKey for SkillBranch {
    fn display_key(&self) -> &str {
        &self.name
    }
}

impl DisplayKey for BossFight {
    fn display_key(&self) -> &str {
        &self.name
    }
}

impl DisplayKey for ConceptArtPrompt {
    fn display_key(&self) -> &str {
        &self.title
    }
}
