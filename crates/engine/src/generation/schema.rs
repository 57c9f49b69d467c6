//! Structured-output schema for the Concept Document.
//!
//! This is the contract sent to the generative service alongside the prompt:
//! every field the presentation layer reads has an entry here, with a
//! description telling the model what belongs in it. Type tags use the
//! service's uppercase convention (`OBJECT`, `ARRAY`, `STRING`, `INTEGER`).
//!
//! The `required` lists describe what a *freshly generated* document must
//! contain; the typed decoder is more lenient so that older documents still
//! load (see `conceptforge_domain::migrate`).

use conceptforge_domain::ScriptPart;
use serde_json::{json, Value};

/// The full response schema for one generation call.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": string("The full title of the game."),
            "executiveSummary": string("A powerful, concise summary of the game's vision and market position."),
            "fullRoadmap": string("A production roadmap from vertical slice to release, as flowing text."),
            "coreGameVision": object(json!({
                "style": string("Genre and camera, e.g. tactical first-person shooter."),
                "world": string("Setting and period."),
                "tone": string("Emotional register of the whole game."),
                "languages": string("Spoken languages and subtitle plan."),
                "primaryMaps": string("The main playable regions."),
            }), &["style", "world", "tone", "languages", "primaryMaps"]),
            "narrative": object(json!({
                "mainStoryline": string("The central storyline across the whole campaign."),
                "playerRole": string("Who the player embodies."),
                "storyArc": string("The dramatic arc from first mission to last."),
                "historicalFidelity": string("How closely events follow the historical record."),
            }), &["mainStoryline", "playerRole", "storyArc", "historicalFidelity"]),
            "gameplayLoop": object(json!({
                "coreLoop": string_array("The repeating loop of play, step by step."),
                "uniqueSystems": string_array("Systems that set this game apart."),
            }), &["coreLoop", "uniqueSystems"]),
            "visualStyle": object(json!({
                "artStyle": string("Overall art direction."),
                "colorPalette": string("Dominant colors and lighting."),
            }), &["artStyle", "colorPalette"]),
            "locations": records("The playable cities and regions.", json!({
                "name": string("Location name."),
                "description": string("What this place looks and feels like in-game."),
            }), &["name", "description"]),
            "missions": records("The campaign missions, in play order.", json!({
                "title": string("Mission title."),
                "location": string("Where the mission takes place."),
                "description": string("Objectives and dramatic beats."),
            }), &["title", "location", "description"]),
            "levelBlueprints": records("One level design treatment per mission.", json!({
                "title": string("Level title, matching its mission."),
                "time": string("Time of day and weather."),
                "vibe": string("The intended mood of the level."),
                "missionType": string("Defense, assault, stealth, and so on."),
                "uniqueMechanics": string_array("Mechanics unique to this level."),
                "keyScene": string("The one scene players will remember."),
            }), &["title", "time", "vibe", "missionType", "uniqueMechanics", "keyScene"]),
            "characters": records("The featured characters.", json!({
                "name": string("Character name."),
                "title": string("Epithet or honorific."),
                "role": string("Narrative and gameplay role."),
                "age": { "type": "INTEGER", "description": "Age in years." },
                "born": string("Birthplace."),
                "personality": string("Core personality in one or two sentences."),
                "battleStyle": string("How this character fights."),
                "motivation": string("What drives them."),
                "look": string_array("Visual details for 3D modeling."),
                "signatureLine": string("One memorable line, in their own voice."),
                "backstory": string("Life before the war."),
                "arc": string("How they change across the campaign."),
                "languages": string_array("Languages they speak."),
            }), &["name", "title", "role", "personality", "look", "signatureLine"]),
            "villain": object(json!({
                "codename": string("The villain's codename."),
                "title": string("Their rank or self-styled title."),
                "voice": string("Voice quality for casting."),
                "accent": string("Accent for casting."),
                "motivation": string("Why they fight."),
                "depth": string("The detail that makes them human."),
                "style": string_array("Visual details for 3D modeling."),
                "chillingLine": string("One line that defines the threat."),
            }), &["codename", "title", "voice", "accent", "motivation", "depth", "style", "chillingLine"]),
            "weapons": records("The weapon roster.", json!({
                "name": string("Weapon name."),
                "kind": string("Class, e.g. assault rifle, DMR."),
                "description": string("In-fiction description."),
                "threeDReference": string("Detailed description for 3D modeling."),
                "specs": string("Caliber, magazine, effective range."),
                "soundDescription": string("What firing it sounds like."),
                "physicsSpecs": string("Muzzle velocity and recoil impulse."),
                "recoilPattern": string("Recoil pattern for the gameplay team."),
                "reloadAnimation": string("Reload animation beats."),
                "environmentalAcoustics": string("How the report changes per environment."),
            }), &["name", "kind", "description", "threeDReference", "specs", "soundDescription",
                  "physicsSpecs", "recoilPattern", "reloadAnimation", "environmentalAcoustics"]),
            "equipment": records("Non-weapon field equipment.", json!({
                "name": string("Item name."),
                "kind": string("Item class."),
                "description": string("What it does in play."),
                "threeDReference": string("Detailed description for 3D modeling."),
            }), &["name", "kind", "description", "threeDReference"]),
            "enemyFactions": records("The opposing forces.", json!({
                "name": string("Faction name."),
                "description": string("Doctrine, equipment, and behavior."),
                "hierarchy": string_array("Ranks from top to bottom."),
            }), &["name", "description"]),
            "audio": object(json!({
                "moodboard": object(json!({
                    "instruments": string_array("Lead instruments of the score."),
                    "keyTracks": records("Named tracks on the soundtrack.", json!({
                        "title": string("Track title."),
                        "description": string("Where it plays and how it feels."),
                    }), &["title", "description"]),
                }), &["instruments", "keyTracks"]),
                "soundEffects": string("The overall sound-design direction."),
            }), &["moodboard", "soundEffects"]),
            "enemyAi": object(json!({
                "patrolChaseEngageRetreat": string("The base combat cycle."),
                "flankingBehavior": string("When and how enemies flank."),
                "grenadeLogic": string("When grenades are thrown."),
                "suppressiveFire": string("How suppression is coordinated."),
                "noiseReaction": string("Reaction to gunfire and silenced shots."),
                "fearMoraleSystem": string("How morale breaks."),
                "behaviorTreeDiagram": string("The behavior tree as indented text."),
                "aiStatesAndTransitions": string("States and what moves the AI between them."),
            }), &["patrolChaseEngageRetreat", "flankingBehavior", "grenadeLogic", "suppressiveFire",
                  "noiseReaction", "fearMoraleSystem", "behaviorTreeDiagram", "aiStatesAndTransitions"]),
            "technicalArchitecture": object(json!({
                "engineChoice": object(json!({
                    "engine": string("The chosen game engine."),
                    "reasoning": string("Why this engine fits the project."),
                }), &["engine", "reasoning"]),
                "coreSystems": records("The systems to build first.", json!({
                    "name": string("System name."),
                    "description": string("What the system does and how it is structured."),
                }), &["name", "description"]),
            }), &["engineChoice", "coreSystems"]),
            "assetCreationPipeline": object(json!({
                "characterAssets": asset_category("Character models and rigs."),
                "weaponAssets": asset_category("Weapon models and animations."),
                "environmentAssets": asset_category("Environment kits and props."),
                "vehicleAssets": asset_category("Vehicles, drivable or set dressing."),
                "audioAssets": asset_category("Recorded and synthesized audio."),
                "pipelineDetails": object(json!({
                    "namingConventions": string("Asset naming conventions."),
                    "polycountTarget": string("Polycount budgets per asset class."),
                    "lodLevels": string("LOD strategy."),
                    "textureMapTypes": string_array("Texture map types in use."),
                }), &["namingConventions", "polycountTarget", "lodLevels", "textureMapTypes"]),
            }), &["characterAssets", "weaponAssets", "environmentAssets", "vehicleAssets",
                  "audioAssets", "pipelineDetails"]),
            "qaBuildDeploymentPlan": object(json!({
                "testingProtocols": string("How the game is tested."),
                "optimizationGuide": string("The main optimization levers."),
                "webglMemoryGuidelines": string("Memory limits for web builds."),
                "buildPipeline": string("How builds are produced and promoted."),
                "postLaunchUpdateRoadmap": string("The update cadence after launch."),
                "performanceBenchmarks": string("Target framerates and hardware."),
            }), &["testingProtocols", "optimizationGuide", "webglMemoryGuidelines",
                  "buildPipeline", "postLaunchUpdateRoadmap", "performanceBenchmarks"]),
            "uiux": object(json!({
                "styleLanguage": string_array("The visual language of the interface."),
                "mainMenu": object(json!({
                    "sceneDescription": string("The scene behind the main menu."),
                    "buttons": string_array("Menu entries, in order."),
                    "sfx": string("Ambient menu audio."),
                }), &["sceneDescription", "buttons", "sfx"]),
                "inGameHud": string_array("HUD elements and when they appear."),
            }), &["styleLanguage", "mainMenu", "inGameHud"]),
            "inventorySystem": object(json!({
                "categories": string_array("Inventory categories."),
                "dynamicWeightSystem": string("How carried weight affects play."),
            }), &["categories", "dynamicWeightSystem"]),
            "skillTree": object(json!({
                "branches": records("The skill branches.", json!({
                    "name": string("Branch name."),
                    "philosophy": string("The idea behind this branch."),
                    "skills": string_array("Skills in unlock order."),
                }), &["name", "philosophy", "skills"]),
            }), &["branches"]),
            "weaponUpgradeTree": object(json!({
                "barrelMods": string_array("Barrel modifications."),
                "optics": string_array("Optic options."),
                "bodyMods": string_array("Body modifications."),
                "ammoTypes": string_array("Ammunition types."),
            }), &["barrelMods", "optics", "bodyMods", "ammoTypes"]),
            "companionCommands": object(json!({
                "basic": string_array("Commands available from the start."),
                "advanced": string_array("Commands unlocked later."),
            }), &["basic", "advanced"]),
            "bossMechanics": object(json!({
                "bosses": records("The boss encounters.", json!({
                    "name": string("Boss name."),
                    "description": string("The shape of the encounter."),
                    "mechanics": string_array("Distinct mechanics, phase by phase."),
                    "finalMoment": string("The closing beat of the fight."),
                }), &["name", "description", "mechanics"]),
            }), &["bosses"]),
            "conceptArtPrompts": records("Prompts for concept artists or image models.", json!({
                "title": string("Short prompt title."),
                "prompt": string("The full art prompt."),
            }), &["title", "prompt"]),
            "cinematicCameraSystem": object(json!({
                "conversation": string("Camera behavior in conversations."),
                "combat": string("Camera behavior in combat."),
                "cutscenes": string("Camera rules for cutscenes."),
            }), &["conversation", "combat", "cutscenes"]),
            "multiplayerModule": object(json!({
                "coOpMode": string("The co-op campaign mode."),
                "leaderboards": string("What is ranked and how."),
                "spectatorMode": string("Spectating rules."),
                "lobbySystem": string("How lobbies form."),
                "netcodeStructure": string("Authority model of the netcode."),
                "antiCheatBasics": string("Baseline anti-cheat measures."),
            }), &["coOpMode", "leaderboards", "spectatorMode", "lobbySystem",
                  "netcodeStructure", "antiCheatBasics"]),
            "trailerScript": screenplay("The announcement trailer as an ordered screenplay."),
            "openingCinematic": screenplay("The opening cinematic as an ordered screenplay."),
            "sampleVoiceLines": records("Sample recorded lines.", json!({
                "character": string("Who speaks."),
                "language": string("Language the line is delivered in."),
                "line": string("The line itself."),
            }), &["character", "language", "line"]),
            "notesForArtists": string("Direct guidance for the art team."),
            "culturalAuthenticityChecklist": string("Checks that keep the depiction authentic."),
        },
        "required": [
            "title", "executiveSummary", "fullRoadmap", "coreGameVision", "narrative",
            "gameplayLoop", "visualStyle", "locations", "missions", "levelBlueprints",
            "characters", "villain", "weapons", "equipment", "enemyFactions", "audio",
            "technicalArchitecture", "enemyAi", "assetCreationPipeline",
            "qaBuildDeploymentPlan", "uiux", "inventorySystem", "skillTree", "weaponUpgradeTree",
            "companionCommands", "bossMechanics", "conceptArtPrompts",
            "cinematicCameraSystem", "trailerScript", "openingCinematic",
            "sampleVoiceLines", "notesForArtists", "culturalAuthenticityChecklist",
        ]
    })
}

fn string(description: &str) -> Value {
    json!({ "type": "STRING", "description": description })
}

fn string_array(description: &str) -> Value {
    json!({
        "type": "ARRAY",
        "description": description,
        "items": { "type": "STRING" }
    })
}

fn object(properties: Value, required: &[&str]) -> Value {
    json!({ "type": "OBJECT", "properties": properties, "required": required })
}

fn records(description: &str, properties: Value, required: &[&str]) -> Value {
    json!({
        "type": "ARRAY",
        "description": description,
        "items": { "type": "OBJECT", "properties": properties, "required": required }
    })
}

fn asset_category(description: &str) -> Value {
    json!({
        "type": "OBJECT",
        "description": description,
        "properties": {
            "description": string("What this category covers."),
            "assetList": string_array("Concrete assets to produce."),
        },
        "required": ["description", "assetList"]
    })
}

/// Schema for an ordered screenplay of discriminated parts.
fn screenplay(description: &str) -> Value {
    json!({
        "type": "OBJECT",
        "description": description,
        "properties": {
            "parts": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "kind": {
                            "type": "STRING",
                            "enum": ScriptPart::KINDS,
                            "description": "What kind of cue this is.",
                        },
                        "character": string("Speaker, for dialogue and narration."),
                        "language": string("Spoken language, for dialogue and narration."),
                        "text": string("The cue text."),
                    },
                    "required": ["kind", "text"]
                }
            }
        },
        "required": ["parts"]
    })
}
