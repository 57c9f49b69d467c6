//! Shared builders for domain tests.

use crate::document::*;
use crate::script::{Screenplay, ScriptPart};

pub fn sample_document() -> ConceptDocument {
    ConceptDocument {
        title: "Peshmerga: The Golden Square".into(),
        narrative: Narrative {
            main_storyline: "Four Peshmerga fighters hold the line through the 2014-2017 war."
                .into(),
            player_role: Some("Sirwan Barzinji, a veteran Peshmerga commander".into()),
            story_arc: Some("From the shock of the first offensive to the liberation of Mosul."
                .into()),
            historical_fidelity: Some(
                "Events follow the real timeline; combat details are dramatized.".into(),
            ),
        },
        gameplay_loop: GameplayLoop {
            core_loop: vec![
                "Brief at the command tent".into(),
                "Fight through the objective".into(),
                "Regroup and upgrade".into(),
            ],
            unique_systems: vec!["Morale-driven enemy retreats".into()],
        },
        visual_style: VisualStyle {
            art_style: "Grounded photorealism".into(),
            color_palette: "Dust ochre, olive drab, golden-hour light".into(),
        },
        locations: vec![
            Location {
                name: "Erbil".into(),
                description: "The citadel city, rallying point of the defense.".into(),
            },
            Location {
                name: "Mosul".into(),
                description: "Occupied metropolis, stage of the final campaign.".into(),
            },
        ],
        missions: vec![
            Mission {
                title: "The Storm Breaks".into(),
                location: Some("Slemani".into()),
                description: "Survive the first night of the offensive.".into(),
            },
            Mission {
                title: "Shields of Erbil".into(),
                location: Some("Erbil".into()),
                description: "Hold the western ridge against armored assault.".into(),
            },
        ],
        enemy_factions: vec![EnemyFaction {
            name: "The Black Banner".into(),
            description: "Fanatical irregulars with captured armor.".into(),
            hierarchy: Some(vec!["Emir".into(), "Field commander".into(), "Fighter".into()]),
        }],
        audio: AudioDesign {
            moodboard: SoundtrackMoodboard {
                instruments: vec!["Duduk".into(), "Daf".into(), "Low strings".into()],
                key_tracks: vec![KeyTrack {
                    title: "The Golden Square".into(),
                    description: "Main theme, a slow duduk lament over war drums.".into(),
                }],
            },
            sound_effects: "Dry desert acoustics, distant artillery rumble.".into(),
        },
        characters: vec![
            Character {
                name: "Sirwan".into(),
                title: "The Wolf of Slemani".into(),
                role: "Protagonist, squad leader".into(),
                personality: "Quiet, deliberate, carries every loss".into(),
                look: vec!["Grey-streaked beard".into(), "Traditional sash over fatigues".into()],
                signature_line: "We were born on this mountain. We do not leave it.".into(),
                age: Some(47),
                born: Some("Slemani".into()),
                battle_style: Some("Marksman, conserves every round".into()),
                motivation: Some("Keep his village off the casualty lists".into()),
                backstory: None,
                arc: None,
                languages: Some(vec!["Sorani".into(), "Arabic".into()]),
            },
            Character {
                name: "Nadia".into(),
                title: "The Eagle".into(),
                role: "Sniper".into(),
                personality: "Sharp-tongued, precise".into(),
                look: vec!["Wind-scarred scope cover".into()],
                signature_line: "One shot buys a street.".into(),
                age: Some(29),
                born: Some("Duhok".into()),
                battle_style: Some("Overwatch".into()),
                motivation: None,
                backstory: None,
                arc: None,
                languages: Some(vec!["Kurmanji".into()]),
            },
        ],
        weapons: vec![Weapon {
            name: "Zagros DMR".into(),
            kind: "Designated marksman rifle".into(),
            description: "Locally refitted rifle with a hand-carved stock.".into(),
            three_d_reference: "Long barrel, wrapped sling, brass-worn receiver".into(),
            specs: "7.62mm, 20-round magazine, 800m effective".into(),
            sound_description: "Sharp crack with a long canyon echo".into(),
            physics_specs: "High muzzle velocity, heavy recoil impulse".into(),
            recoil_pattern: "Vertical kick, slow settle".into(),
            reload_animation: "Deliberate magazine swap, chamber check".into(),
            environmental_acoustics: "Echo doubles in mountain passes".into(),
        }],
        equipment: vec![Equipment {
            name: "Signal mirror".into(),
            kind: "Field equipment".into(),
            description: "Polished steel mirror for silent ridge-to-ridge signals.".into(),
            three_d_reference: "Palm-sized, leather thong, scratched face".into(),
        }],
        executive_summary: Some(
            "A grounded first-person campaign about the Peshmerga war, 2014-2017.".into(),
        ),
        full_roadmap: Some("Vertical slice, then a three-act campaign, then co-op.".into()),
        core_game_vision: Some(CoreGameVision {
            style: "Tactical first-person shooter".into(),
            world: "Kurdistan region, 2014-2017".into(),
            tone: "Somber, heroic, unsentimental".into(),
            languages: "Sorani, Kurmanji, Arabic, English subtitles".into(),
            primary_maps: "Slemani, Erbil, Duhok, Mosul".into(),
        }),
        villain: Some(Villain {
            codename: "The Falcon".into(),
            title: "Emir of the northern front".into(),
            voice: "Low, unhurried".into(),
            accent: "Gulf Arabic".into(),
            motivation: "Believes terror is mercy shortened".into(),
            depth: "A former teacher who burned his own school".into(),
            style: vec!["Black banner cloak".into(), "Falconry glove".into()],
            chilling_line: "Your mountains will learn new prayers.".into(),
        }),
        enemy_ai: Some(EnemyAi {
            patrol_chase_engage_retreat: "Patrols in pairs, breaks contact at half strength."
                .into(),
            flanking_behavior: "Flanks through covered alleys when suppressed.".into(),
            grenade_logic: "Grenades flush entrenched players after 10s of cover.".into(),
            suppressive_fire: "Machine gunners pin while riflemen move.".into(),
            noise_reaction: "Investigates gunfire in pairs, silenced shots in singles.".into(),
            fear_morale_system: "Leader death triggers morale checks squad-wide.".into(),
            behavior_tree_diagram: "Patrol -> Alert -> Engage -> (Flank | Suppress) -> Retreat"
                .into(),
            ai_states_and_transitions: "Idle, Suspicious, Combat, Broken.".into(),
        }),
        technical_architecture: Some(TechnicalArchitecture {
            engine_choice: EngineChoice {
                engine: "Unity 6 (URP)".into(),
                reasoning: "WebGL export and a deep asset ecosystem.".into(),
            },
            core_systems: vec![
                CoreSystem {
                    name: "Squad command".into(),
                    description: "Order queue with contextual targets.".into(),
                },
                CoreSystem {
                    name: "Morale".into(),
                    description: "Per-squad morale driving retreats.".into(),
                },
            ],
        }),
        asset_creation_pipeline: Some(AssetCreationPipeline {
            character_assets: AssetCategory {
                description: "Four hero fighters plus faction bodies.".into(),
                asset_list: vec!["Sirwan hero model".into(), "Faction rifleman".into()],
            },
            weapon_assets: AssetCategory {
                description: "Refitted regional small arms.".into(),
                asset_list: vec!["Zagros DMR".into()],
            },
            environment_assets: AssetCategory {
                description: "Modular city blocks and ridge lines.".into(),
                asset_list: vec!["Citadel wall kit".into()],
            },
            vehicle_assets: AssetCategory {
                description: "Captured armor and technicals.".into(),
                asset_list: vec!["Armed pickup".into()],
            },
            audio_assets: AssetCategory {
                description: "Weapon reports and regional instruments.".into(),
                asset_list: vec!["Duduk phrases".into()],
            },
            pipeline_details: AssetPipelineDetails {
                naming_conventions: "snake_case with category prefixes".into(),
                polycount_target: "30k triangles for hero characters".into(),
                lod_levels: "Three LODs, last at 10%".into(),
                texture_map_types: vec!["Albedo".into(), "Normal".into(), "ORM".into()],
            },
        }),
        qa_build_deployment_plan: Some(QaBuildDeploymentPlan {
            testing_protocols: "Nightly smoke runs of every mission.".into(),
            optimization_guide: "Batch static geometry per district.".into(),
            webgl_memory_guidelines: "Stay under 2GB heap on web builds.".into(),
            build_pipeline: "CI builds per commit, weekly playable.".into(),
            post_launch_update_roadmap: "Co-op first, then mission packs.".into(),
            performance_benchmarks: "60fps at 1080p on mid-range hardware.".into(),
        }),
        level_blueprints: Some(vec![LevelBlueprint {
            title: "The Storm Breaks".into(),
            time: "Night, rolling blackouts".into(),
            vibe: "Chaos, tracer-lit streets".into(),
            mission_type: "Survival defense".into(),
            unique_mechanics: vec!["Dynamic power grid".into()],
            key_scene: "The bridge falls at dawn.".into(),
        }]),
        uiux: Some(UiUxDesign {
            style_language: vec!["Stencil type".into(), "Worn map textures".into()],
            main_menu: MainMenu {
                scene_description: "A ridge at dusk, flag snapping in the wind.".into(),
                buttons: vec!["Campaign".into(), "Co-op".into(), "Settings".into()],
                sfx: "Wind, distant radio chatter".into(),
            },
            in_game_hud: vec!["Minimal compass".into(), "Ammo on weapon inspect".into()],
        }),
        inventory_system: Some(InventorySystem {
            categories: vec!["Weapons".into(), "Medical".into(), "Intel".into()],
            dynamic_weight_system: "Carried weight slows sprint and loudens footsteps.".into(),
        }),
        skill_tree: Some(SkillTree {
            branches: vec![
                SkillBranch {
                    name: "Wolf".into(),
                    philosophy: "Endurance and survival".into(),
                    skills: vec!["Second Wind".into(), "Mountain Lungs".into()],
                },
                SkillBranch {
                    name: "Eagle".into(),
                    philosophy: "Precision at range".into(),
                    skills: vec!["Breath Control".into(), "Spotter's Eye".into()],
                },
            ],
        }),
        weapon_upgrade_tree: Some(WeaponUpgradeTree {
            barrel_mods: vec!["Suppressor".into()],
            optics: vec!["4x scope".into()],
            body_mods: vec!["Carved stock".into()],
            ammo_types: vec!["Armor-piercing".into()],
        }),
        companion_commands: Some(CompanionCommands {
            basic: vec!["Hold".into(), "Move to".into()],
            advanced: vec!["Suppress target".into(), "Flank left".into()],
        }),
        boss_mechanics: Some(BossMechanics {
            bosses: vec![BossFight {
                name: "The Falcon".into(),
                description: "A three-phase siege of the grain silo.".into(),
                mechanics: vec!["Mortar call-ins".into(), "Hostage shields".into()],
                final_moment: Some("He releases his falcon before the end.".into()),
            }],
        }),
        concept_art_prompts: Some(vec![ConceptArtPrompt {
            title: "Ridge at dusk".into(),
            prompt: "Peshmerga silhouettes on a golden ridge, photoreal, 35mm.".into(),
        }]),
        cinematic_camera_system: Some(CinematicCameraSystem {
            conversation: "Slow push-ins over the shoulder.".into(),
            combat: "Handheld shake scaled to nearby impacts.".into(),
            cutscenes: "Long takes, no cuts under 4 seconds.".into(),
        }),
        multiplayer_module: Some(MultiplayerModule {
            co_op_mode: "Two-player campaign".into(),
            leaderboards: "Weekly ridge-defense times".into(),
            spectator_mode: "Free camera after death".into(),
            lobby_system: "Invite-only squads".into(),
            netcode_structure: "Client prediction with server authority".into(),
            anti_cheat_basics: "Server-side hit validation".into(),
        }),
        trailer_script: Some(Screenplay {
            parts: vec![
                ScriptPart::Camera {
                    text: "Drone shot over a burning ridge at dawn.".into(),
                },
                ScriptPart::Narration {
                    character: "Sirwan".into(),
                    language: "Sorani".into(),
                    text: "They came for our mountains.".into(),
                },
                ScriptPart::SoundEffect {
                    text: "A single rifle bolt closing.".into(),
                },
                ScriptPart::Cut {
                    text: "Black.".into(),
                },
                ScriptPart::TitleCard {
                    text: "PESHMERGA: THE GOLDEN SQUARE".into(),
                },
                ScriptPart::Dialogue {
                    character: "Sirwan".into(),
                    language: "Sorani".into(),
                    text: "We do not leave.".into(),
                },
            ],
        }),
        opening_cinematic: Some(Screenplay {
            parts: vec![
                ScriptPart::Action {
                    text: "A quiet orchard outside Slemani. Children chase a kite.".into(),
                },
                ScriptPart::Camera {
                    text: "Tilt from the kite to a dust column on the horizon.".into(),
                },
                ScriptPart::Dialogue {
                    character: "Araz".into(),
                    language: "Arabic".into(),
                    text: "They are coming!".into(),
                },
                ScriptPart::TitleCard {
                    text: "August 2014".into(),
                },
            ],
        }),
        sample_voice_lines: Some(vec![VoiceLine {
            character: "Nadia".into(),
            language: "Kurmanji".into(),
            line: "One shot buys a street.".into(),
        }]),
        notes_for_artists: Some("Reference real Peshmerga kit; avoid generic military props."
            .into()),
        cultural_authenticity_checklist: Some(
            "Dialects reviewed by native speakers; flags and patches period-correct.".into(),
        ),
    }
}
