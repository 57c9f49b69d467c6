//! Presentation projection: flatten a Concept Document into an ordered list
//! of sections a front-end can display without knowing the document shape.
//!
//! The projection is pure and total: optional sections that are absent simply
//! produce no section, and every screenplay part kind renders via an
//! exhaustive match in [`render_part`].

use crate::document::*;
use crate::script::{Screenplay, ScriptPart};

/// One displayable section, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(String),
    Bullets(Vec<String>),
    /// A titled record rendered as label/value rows.
    Card {
        title: String,
        lines: Vec<(String, String)>,
    },
    /// One screenplay cue: `cue` is the slug line, `text` the content.
    ScriptLine { cue: String, text: String },
}

/// Render a single screenplay part as a display block.
pub fn render_part(part: &ScriptPart) -> Block {
    let (cue, text) = match part {
        ScriptPart::Narration {
            character,
            language,
            text,
        } => (format!("{character} (V.O., {language})"), text),
        ScriptPart::Dialogue {
            character,
            language,
            text,
        } => (format!("{character} ({language})"), text),
        ScriptPart::Action { text } => ("ACTION".to_string(), text),
        ScriptPart::Camera { text } => ("CAMERA".to_string(), text),
        ScriptPart::SoundEffect { text } => ("SFX".to_string(), text),
        ScriptPart::Cut { text } => ("CUT TO".to_string(), text),
        ScriptPart::TitleCard { text } => ("TITLE CARD".to_string(), text),
    };
    Block::ScriptLine {
        cue,
        text: text.clone(),
    }
}

/// Project a whole document into ordered sections. Collections render in
/// listed order; absent optional sections are skipped entirely.
pub fn render_document(doc: &ConceptDocument) -> Vec<Section> {
    let mut sections = Vec::new();

    if let Some(summary) = &doc.executive_summary {
        push_paragraph(&mut sections, "Executive Summary", summary);
    }
    if let Some(vision) = &doc.core_game_vision {
        sections.push(Section {
            heading: "Core Vision".into(),
            blocks: vec![Block::Card {
                title: doc.title.clone(),
                lines: vec![
                    ("Style".into(), vision.style.clone()),
                    ("World".into(), vision.world.clone()),
                    ("Tone".into(), vision.tone.clone()),
                    ("Languages".into(), vision.languages.clone()),
                    ("Primary Maps".into(), vision.primary_maps.clone()),
                ],
            }],
        });
    }

    sections.push(narrative_section(&doc.narrative));
    sections.push(gameplay_section(&doc.gameplay_loop));
    sections.push(Section {
        heading: "Visual Style".into(),
        blocks: vec![Block::Card {
            title: doc.visual_style.art_style.clone(),
            lines: vec![(
                "Color Palette".into(),
                doc.visual_style.color_palette.clone(),
            )],
        }],
    });

    sections.push(Section {
        heading: "Locations".into(),
        blocks: doc.locations.iter().map(location_card).collect(),
    });
    sections.push(Section {
        heading: "Missions".into(),
        blocks: doc.missions.iter().map(mission_card).collect(),
    });
    if let Some(blueprints) = &doc.level_blueprints {
        sections.push(Section {
            heading: "Level Blueprints".into(),
            blocks: blueprints.iter().map(blueprint_card).collect(),
        });
    }

    if !doc.characters.is_empty() {
        sections.push(Section {
            heading: "Characters".into(),
            blocks: doc.characters.iter().map(character_card).collect(),
        });
    }
    if let Some(villain) = &doc.villain {
        sections.push(villain_section(villain));
    }
    if !doc.weapons.is_empty() {
        sections.push(Section {
            heading: "Weapons".into(),
            blocks: doc.weapons.iter().map(weapon_card).collect(),
        });
    }
    if !doc.equipment.is_empty() {
        sections.push(Section {
            heading: "Equipment".into(),
            blocks: doc
                .equipment
                .iter()
                .map(|item| Block::Card {
                    title: item.name.clone(),
                    lines: vec![
                        ("Type".into(), item.kind.clone()),
                        ("Description".into(), item.description.clone()),
                        ("3D Reference".into(), item.three_d_reference.clone()),
                    ],
                })
                .collect(),
        });
    }
    sections.push(Section {
        heading: "Enemy Factions".into(),
        blocks: doc
            .enemy_factions
            .iter()
            .map(|faction| {
                let mut lines = vec![("Description".into(), faction.description.clone())];
                if let Some(hierarchy) = &faction.hierarchy {
                    lines.push(("Hierarchy".into(), hierarchy.join(" > ")));
                }
                Block::Card {
                    title: faction.name.clone(),
                    lines,
                }
            })
            .collect(),
    });

    sections.push(audio_section(&doc.audio));
    if let Some(architecture) = &doc.technical_architecture {
        sections.push(technical_architecture_section(architecture));
    }
    if let Some(ai) = &doc.enemy_ai {
        sections.push(enemy_ai_section(ai));
    }
    if let Some(pipeline) = &doc.asset_creation_pipeline {
        sections.push(asset_pipeline_section(pipeline));
    }
    if let Some(plan) = &doc.qa_build_deployment_plan {
        sections.push(qa_plan_section(plan));
    }
    if let Some(uiux) = &doc.uiux {
        sections.push(uiux_section(uiux));
    }
    if let Some(inventory) = &doc.inventory_system {
        sections.push(Section {
            heading: "Inventory".into(),
            blocks: vec![
                Block::Bullets(inventory.categories.clone()),
                Block::Paragraph(inventory.dynamic_weight_system.clone()),
            ],
        });
    }
    if let Some(tree) = &doc.skill_tree {
        sections.push(Section {
            heading: "Skill Tree".into(),
            blocks: tree
                .branches
                .iter()
                .map(|branch| Block::Card {
                    title: branch.name.clone(),
                    lines: vec![
                        ("Philosophy".into(), branch.philosophy.clone()),
                        ("Skills".into(), branch.skills.join(", ")),
                    ],
                })
                .collect(),
        });
    }
    if let Some(upgrades) = &doc.weapon_upgrade_tree {
        sections.push(Section {
            heading: "Weapon Upgrades".into(),
            blocks: vec![Block::Card {
                title: "Upgrade Paths".into(),
                lines: vec![
                    ("Barrel".into(), upgrades.barrel_mods.join(", ")),
                    ("Optics".into(), upgrades.optics.join(", ")),
                    ("Body".into(), upgrades.body_mods.join(", ")),
                    ("Ammo".into(), upgrades.ammo_types.join(", ")),
                ],
            }],
        });
    }
    if let Some(commands) = &doc.companion_commands {
        sections.push(Section {
            heading: "Companion Commands".into(),
            blocks: vec![
                Block::Bullets(commands.basic.clone()),
                Block::Bullets(commands.advanced.clone()),
            ],
        });
    }
    if let Some(mechanics) = &doc.boss_mechanics {
        sections.push(Section {
            heading: "Boss Mechanics".into(),
            blocks: mechanics
                .bosses
                .iter()
                .map(|boss| {
                    let mut lines = vec![
                        ("Description".into(), boss.description.clone()),
                        ("Mechanics".into(), boss.mechanics.join("; ")),
                    ];
                    if let Some(final_moment) = &boss.final_moment {
                        lines.push(("Final Moment".into(), final_moment.clone()));
                    }
                    Block::Card {
                        title: boss.name.clone(),
                        lines,
                    }
                })
                .collect(),
        });
    }
    if let Some(prompts) = &doc.concept_art_prompts {
        sections.push(Section {
            heading: "Concept Art Prompts".into(),
            blocks: prompts
                .iter()
                .map(|prompt| Block::Card {
                    title: prompt.title.clone(),
                    lines: vec![("Prompt".into(), prompt.prompt.clone())],
                })
                .collect(),
        });
    }
    if let Some(camera) = &doc.cinematic_camera_system {
        sections.push(Section {
            heading: "Cinematic Camera".into(),
            blocks: vec![Block::Card {
                title: "Camera System".into(),
                lines: vec![
                    ("Conversation".into(), camera.conversation.clone()),
                    ("Combat".into(), camera.combat.clone()),
                    ("Cutscenes".into(), camera.cutscenes.clone()),
                ],
            }],
        });
    }
    if let Some(multiplayer) = &doc.multiplayer_module {
        sections.push(Section {
            heading: "Multiplayer".into(),
            blocks: vec![Block::Card {
                title: "Multiplayer Module".into(),
                lines: vec![
                    ("Co-op".into(), multiplayer.co_op_mode.clone()),
                    ("Leaderboards".into(), multiplayer.leaderboards.clone()),
                    ("Spectator".into(), multiplayer.spectator_mode.clone()),
                    ("Lobby".into(), multiplayer.lobby_system.clone()),
                    ("Netcode".into(), multiplayer.netcode_structure.clone()),
                    ("Anti-cheat".into(), multiplayer.anti_cheat_basics.clone()),
                ],
            }],
        });
    }

    if let Some(script) = &doc.trailer_script {
        sections.push(screenplay_section("Trailer Script", script));
    }
    if let Some(script) = &doc.opening_cinematic {
        sections.push(screenplay_section("Opening Cinematic", script));
    }
    if let Some(lines) = &doc.sample_voice_lines {
        sections.push(Section {
            heading: "Voice Lines".into(),
            blocks: lines
                .iter()
                .map(|line| Block::ScriptLine {
                    cue: format!("{} ({})", line.character, line.language),
                    text: line.line.clone(),
                })
                .collect(),
        });
    }

    if let Some(notes) = &doc.notes_for_artists {
        push_paragraph(&mut sections, "Notes for Artists", notes);
    }
    if let Some(checklist) = &doc.cultural_authenticity_checklist {
        push_paragraph(&mut sections, "Cultural Authenticity", checklist);
    }
    if let Some(roadmap) = &doc.full_roadmap {
        push_paragraph(&mut sections, "Roadmap", roadmap);
    }

    sections
}

fn push_paragraph(sections: &mut Vec<Section>, heading: &str, text: &str) {
    sections.push(Section {
        heading: heading.to_string(),
        blocks: vec![Block::Paragraph(text.to_string())],
    });
}

fn narrative_section(narrative: &Narrative) -> Section {
    let mut blocks = vec![Block::Paragraph(narrative.main_storyline.clone())];
    let mut lines = Vec::new();
    if let Some(role) = &narrative.player_role {
        lines.push(("Player Role".into(), role.clone()));
    }
    if let Some(arc) = &narrative.story_arc {
        lines.push(("Story Arc".into(), arc.clone()));
    }
    if let Some(fidelity) = &narrative.historical_fidelity {
        lines.push(("Historical Fidelity".into(), fidelity.clone()));
    }
    if !lines.is_empty() {
        blocks.push(Block::Card {
            title: "Framing".into(),
            lines,
        });
    }
    Section {
        heading: "Narrative".into(),
        blocks,
    }
}

fn gameplay_section(gameplay: &GameplayLoop) -> Section {
    let mut blocks = Vec::new();
    if !gameplay.core_loop.is_empty() {
        blocks.push(Block::Bullets(gameplay.core_loop.clone()));
    }
    if !gameplay.unique_systems.is_empty() {
        blocks.push(Block::Bullets(gameplay.unique_systems.clone()));
    }
    Section {
        heading: "Gameplay Loop".into(),
        blocks,
    }
}

fn location_card(location: &Location) -> Block {
    Block::Card {
        title: location.name.clone(),
        lines: vec![("Description".into(), location.description.clone())],
    }
}

fn mission_card(mission: &Mission) -> Block {
    let mut lines = Vec::new();
    if let Some(location) = &mission.location {
        lines.push(("Location".into(), location.clone()));
    }
    lines.push(("Description".into(), mission.description.clone()));
    Block::Card {
        title: mission.title.clone(),
        lines,
    }
}

fn blueprint_card(blueprint: &LevelBlueprint) -> Block {
    Block::Card {
        title: blueprint.title.clone(),
        lines: vec![
            ("Time".into(), blueprint.time.clone()),
            ("Vibe".into(), blueprint.vibe.clone()),
            ("Mission Type".into(), blueprint.mission_type.clone()),
            ("Unique Mechanics".into(), blueprint.unique_mechanics.join("; ")),
            ("Key Scene".into(), blueprint.key_scene.clone()),
        ],
    }
}

fn character_card(character: &Character) -> Block {
    let mut lines = vec![
        ("Title".into(), character.title.clone()),
        ("Role".into(), character.role.clone()),
        ("Personality".into(), character.personality.clone()),
        ("Look".into(), character.look.join("; ")),
        ("Signature Line".into(), character.signature_line.clone()),
    ];
    if let Some(age) = character.age {
        lines.push(("Age".into(), age.to_string()));
    }
    if let Some(born) = &character.born {
        lines.push(("Born".into(), born.clone()));
    }
    if let Some(style) = &character.battle_style {
        lines.push(("Battle Style".into(), style.clone()));
    }
    if let Some(motivation) = &character.motivation {
        lines.push(("Motivation".into(), motivation.clone()));
    }
    if let Some(backstory) = &character.backstory {
        lines.push(("Backstory".into(), backstory.clone()));
    }
    if let Some(arc) = &character.arc {
        lines.push(("Arc".into(), arc.clone()));
    }
    if let Some(languages) = &character.languages {
        lines.push(("Languages".into(), languages.join(", ")));
    }
    Block::Card {
        title: character.name.clone(),
        lines,
    }
}

fn villain_section(villain: &Villain) -> Section {
    Section {
        heading: "Villain".into(),
        blocks: vec![Block::Card {
            title: villain.codename.clone(),
            lines: vec![
                ("Title".into(), villain.title.clone()),
                ("Voice".into(), villain.voice.clone()),
                ("Accent".into(), villain.accent.clone()),
                ("Motivation".into(), villain.motivation.clone()),
                ("Depth".into(), villain.depth.clone()),
                ("Style".into(), villain.style.join("; ")),
                ("Chilling Line".into(), villain.chilling_line.clone()),
            ],
        }],
    }
}

fn weapon_card(weapon: &Weapon) -> Block {
    Block::Card {
        title: weapon.name.clone(),
        lines: vec![
            ("Type".into(), weapon.kind.clone()),
            ("Description".into(), weapon.description.clone()),
            ("3D Reference".into(), weapon.three_d_reference.clone()),
            ("Specs".into(), weapon.specs.clone()),
            ("Sound".into(), weapon.sound_description.clone()),
            ("Physics".into(), weapon.physics_specs.clone()),
            ("Recoil".into(), weapon.recoil_pattern.clone()),
            ("Reload".into(), weapon.reload_animation.clone()),
            ("Acoustics".into(), weapon.environmental_acoustics.clone()),
        ],
    }
}

fn audio_section(audio: &AudioDesign) -> Section {
    let mut blocks = Vec::new();
    if !audio.moodboard.instruments.is_empty() {
        blocks.push(Block::Bullets(audio.moodboard.instruments.clone()));
    }
    for track in &audio.moodboard.key_tracks {
        blocks.push(Block::Card {
            title: track.title.clone(),
            lines: vec![("Description".into(), track.description.clone())],
        });
    }
    blocks.push(Block::Paragraph(audio.sound_effects.clone()));
    Section {
        heading: "Audio".into(),
        blocks,
    }
}

fn enemy_ai_section(ai: &EnemyAi) -> Section {
    Section {
        heading: "Enemy AI".into(),
        blocks: vec![Block::Card {
            title: "Combat Behavior".into(),
            lines: vec![
                ("Patrol/Chase/Engage/Retreat".into(), ai.patrol_chase_engage_retreat.clone()),
                ("Flanking".into(), ai.flanking_behavior.clone()),
                ("Grenades".into(), ai.grenade_logic.clone()),
                ("Suppression".into(), ai.suppressive_fire.clone()),
                ("Noise Reaction".into(), ai.noise_reaction.clone()),
                ("Fear & Morale".into(), ai.fear_morale_system.clone()),
                ("Behavior Tree".into(), ai.behavior_tree_diagram.clone()),
                ("States".into(), ai.ai_states_and_transitions.clone()),
            ],
        }],
    }
}

fn technical_architecture_section(architecture: &TechnicalArchitecture) -> Section {
    let mut blocks = vec![Block::Card {
        title: format!("Engine Choice: {}", architecture.engine_choice.engine),
        lines: vec![(
            "Reasoning".into(),
            architecture.engine_choice.reasoning.clone(),
        )],
    }];
    for system in &architecture.core_systems {
        blocks.push(Block::Card {
            title: system.name.clone(),
            lines: vec![("Description".into(), system.description.clone())],
        });
    }
    Section {
        heading: "Technical Architecture".into(),
        blocks,
    }
}

fn asset_pipeline_section(pipeline: &AssetCreationPipeline) -> Section {
    let categories = [
        ("Character Assets", &pipeline.character_assets),
        ("Weapon Assets", &pipeline.weapon_assets),
        ("Environment Assets", &pipeline.environment_assets),
        ("Vehicle Assets", &pipeline.vehicle_assets),
        ("Audio Assets", &pipeline.audio_assets),
    ];
    let mut blocks = Vec::new();
    for (title, category) in categories {
        blocks.push(Block::Card {
            title: title.to_string(),
            lines: vec![("Description".into(), category.description.clone())],
        });
        blocks.push(Block::Bullets(category.asset_list.clone()));
    }
    blocks.push(Block::Card {
        title: "Pipeline Details".into(),
        lines: vec![
            ("Naming".into(), pipeline.pipeline_details.naming_conventions.clone()),
            ("Polycount".into(), pipeline.pipeline_details.polycount_target.clone()),
            ("LODs".into(), pipeline.pipeline_details.lod_levels.clone()),
            (
                "Texture Maps".into(),
                pipeline.pipeline_details.texture_map_types.join(", "),
            ),
        ],
    });
    Section {
        heading: "Asset Pipeline".into(),
        blocks,
    }
}

fn qa_plan_section(plan: &QaBuildDeploymentPlan) -> Section {
    Section {
        heading: "QA & Deployment".into(),
        blocks: vec![Block::Card {
            title: "QA, Build & Deployment".into(),
            lines: vec![
                ("Testing".into(), plan.testing_protocols.clone()),
                ("Optimization".into(), plan.optimization_guide.clone()),
                ("Memory".into(), plan.webgl_memory_guidelines.clone()),
                ("Build Pipeline".into(), plan.build_pipeline.clone()),
                ("Post-launch".into(), plan.post_launch_update_roadmap.clone()),
                ("Benchmarks".into(), plan.performance_benchmarks.clone()),
            ],
        }],
    }
}

fn uiux_section(uiux: &UiUxDesign) -> Section {
    Section {
        heading: "UI & UX".into(),
        blocks: vec![
            Block::Bullets(uiux.style_language.clone()),
            Block::Card {
                title: "Main Menu".into(),
                lines: vec![
                    ("Scene".into(), uiux.main_menu.scene_description.clone()),
                    ("Buttons".into(), uiux.main_menu.buttons.join(", ")),
                    ("SFX".into(), uiux.main_menu.sfx.clone()),
                ],
            },
            Block::Bullets(uiux.in_game_hud.clone()),
        ],
    }
}

fn screenplay_section(heading: &str, script: &Screenplay) -> Section {
    Section {
        heading: heading.to_string(),
        blocks: script.parts.iter().map(render_part).collect(),
    }
}
