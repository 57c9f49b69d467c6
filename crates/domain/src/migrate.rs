//! Shape migration for Concept Documents.
//!
//! The document schema has been through revisions. The first revision had no
//! character roster, kept factions under `factions`, described gameplay as a
//! flat `gameplayMechanics` list and audio as two strings. The second carried
//! fixed-field trailer and cinematic objects keyed by character names, and
//! fixed-key boss entries. [`migrate_to_current`] lifts any of those shapes
//! to the canonical one; canonical input passes through untouched, so it is
//! safe to run on every document before typed decoding.

use serde_json::{json, Map, Value};

type Doc = Map<String, Value>;

/// Lift a raw document of any known revision to the canonical shape.
/// Pure and idempotent.
pub fn migrate_to_current(mut value: Value) -> Value {
    if let Value::Object(ref mut doc) = value {
        rename_field(doc, "enemyAI", "enemyAi");
        lift_core_game_vision(doc);
        lift_factions(doc);
        lift_gameplay_mechanics(doc);
        lift_narrative(doc);
        lift_audio(doc);
        rename_type_to_kind(doc, "weapons");
        rename_type_to_kind(doc, "equipment");
        lift_boss_mechanics(doc);
        lift_screenplay(doc, "trailerScript", TRAILER_CUES);
        lift_screenplay(doc, "openingCinematic", CINEMATIC_CUES);
    }
    value
}

fn rename_field(doc: &mut Doc, from: &str, to: &str) {
    if !doc.contains_key(to) {
        if let Some(value) = doc.remove(from) {
            doc.insert(to.into(), value);
        }
    }
}

/// Second revision declared `languages` and `primaryMaps` as string arrays;
/// canonical keeps them as single display strings.
fn lift_core_game_vision(doc: &mut Doc) {
    let Some(Value::Object(vision)) = doc.get_mut("coreGameVision") else {
        return;
    };
    for field in ["languages", "primaryMaps"] {
        if let Some(Value::Array(items)) = vision.get(field) {
            let joined = items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            vision.insert(field.into(), Value::String(joined));
        }
    }
}

fn lift_factions(doc: &mut Doc) {
    if !doc.contains_key("enemyFactions") {
        if let Some(factions) = doc.remove("factions") {
            doc.insert("enemyFactions".into(), factions);
        }
    }
}

/// First revision: `gameplayMechanics: [{name, description}]` instead of a
/// structured loop. Folded into `gameplayLoop.uniqueSystems`.
fn lift_gameplay_mechanics(doc: &mut Doc) {
    let Some(mechanics) = doc.remove("gameplayMechanics") else {
        return;
    };
    if doc.contains_key("gameplayLoop") {
        return;
    }
    let systems: Vec<Value> = mechanics
        .as_array()
        .map(|items| {
            items
                .iter()
                .map(|item| {
                    let name = item.get("name").and_then(Value::as_str).unwrap_or_default();
                    let description = item
                        .get("description")
                        .and_then(Value::as_str)
                        .unwrap_or_default();
                    if name.is_empty() {
                        Value::String(description.to_string())
                    } else if description.is_empty() {
                        Value::String(name.to_string())
                    } else {
                        Value::String(format!("{name}: {description}"))
                    }
                })
                .collect()
        })
        .unwrap_or_default();
    doc.insert(
        "gameplayLoop".into(),
        json!({ "coreLoop": [], "uniqueSystems": systems }),
    );
}

/// First revision narratives had no `mainStoryline`; the story arc is the
/// closest equivalent.
fn lift_narrative(doc: &mut Doc) {
    let Some(Value::Object(narrative)) = doc.get_mut("narrative") else {
        return;
    };
    if narrative.contains_key("mainStoryline") {
        return;
    }
    let storyline = narrative
        .get("storyArc")
        .or_else(|| narrative.get("playerRole"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    narrative.insert("mainStoryline".into(), Value::String(storyline));
}

/// First revision audio was `{soundtrack, soundEffects}`; the soundtrack
/// string becomes a single key track on an empty moodboard.
fn lift_audio(doc: &mut Doc) {
    let Some(Value::Object(audio)) = doc.get_mut("audio") else {
        return;
    };
    if audio.contains_key("moodboard") {
        return;
    }
    let soundtrack = audio
        .remove("soundtrack")
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default();
    audio.insert(
        "moodboard".into(),
        json!({
            "instruments": [],
            "keyTracks": [{ "title": "Soundtrack", "description": soundtrack }]
        }),
    );
    if !audio.contains_key("soundEffects") {
        audio.insert("soundEffects".into(), Value::String(String::new()));
    }
}

/// Older item records used the reserved-sounding `type`; canonical is `kind`.
fn rename_type_to_kind(doc: &mut Doc, collection: &str) {
    let Some(Value::Array(items)) = doc.get_mut(collection) else {
        return;
    };
    for item in items {
        let Value::Object(record) = item else {
            continue;
        };
        if !record.contains_key("kind") {
            if let Some(kind) = record.remove("type") {
                record.insert("kind".into(), kind);
            }
        }
    }
}

/// Boss entries used to be fixed object keys (`theFalcon`, `theRaven`); the
/// canonical shape is a uniform list with the name inside the record.
fn lift_boss_mechanics(doc: &mut Doc) {
    let Some(Value::Object(mechanics)) = doc.get_mut("bossMechanics") else {
        return;
    };
    if mechanics.contains_key("bosses") {
        return;
    }
    let mut bosses = Vec::new();
    for (key, entry) in std::mem::take(mechanics) {
        let Value::Object(mut record) = entry else {
            continue;
        };
        let name = match key.as_str() {
            "theFalcon" => "The Falcon".to_string(),
            "theRaven" => "The Raven".to_string(),
            other => other.to_string(),
        };
        record.entry("name").or_insert(Value::String(name));
        record
            .entry("description")
            .or_insert(Value::String(String::new()));
        record.entry("mechanics").or_insert(json!([]));
        bosses.push(Value::Object(record));
    }
    mechanics.insert("bosses".into(), Value::Array(bosses));
}

/// How one fixed legacy field maps into a screenplay part.
enum Cue {
    Text(&'static str, &'static str),
    Spoken(&'static str, &'static str, &'static str, &'static str),
    /// An array of strings, one part per element.
    TextList(&'static str, &'static str),
}

/// Second-revision trailer layout, in screen order. The speakers and
/// languages were baked into the field names of that revision.
const TRAILER_CUES: &[Cue] = &[
    Cue::Text("openingShot", "camera"),
    Cue::Spoken("sirwanVO", "narration", "Sirwan", "Sorani"),
    Cue::Spoken("falconVO", "narration", "The Falcon", "Arabic"),
    Cue::TextList("actionCuts", "cut"),
    Cue::Text("titleCard", "titleCard"),
    Cue::Spoken("finalLine", "dialogue", "Sirwan", "Sorani"),
];

const CINEMATIC_CUES: &[Cue] = &[
    Cue::Text("scene", "action"),
    Cue::Spoken("sirwanVO", "narration", "Sirwan", "Sorani"),
    Cue::Spoken("arazShout", "dialogue", "Araz", "Arabic"),
    Cue::Text("cameraDirections", "camera"),
    Cue::Text("titleCard", "titleCard"),
];

fn lift_screenplay(doc: &mut Doc, field: &str, cues: &[Cue]) {
    let Some(Value::Object(legacy)) = doc.get_mut(field) else {
        return;
    };
    if legacy.contains_key("parts") {
        return;
    }
    let mut parts = Vec::new();
    for cue in cues {
        match cue {
            Cue::Text(key, kind) => {
                if let Some(text) = legacy.get(*key).and_then(Value::as_str) {
                    parts.push(json!({ "kind": kind, "text": text }));
                }
            }
            Cue::Spoken(key, kind, character, language) => {
                if let Some(text) = legacy.get(*key).and_then(Value::as_str) {
                    parts.push(json!({
                        "kind": kind,
                        "character": character,
                        "language": language,
                        "text": text,
                    }));
                }
            }
            Cue::TextList(key, kind) => {
                if let Some(items) = legacy.get(*key).and_then(Value::as_array) {
                    for item in items {
                        if let Some(text) = item.as_str() {
                            parts.push(json!({ "kind": kind, "text": text }));
                        }
                    }
                }
            }
        }
    }
    doc.insert(field.into(), json!({ "parts": parts }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ConceptDocument;
    use crate::script::ScriptPart;
    use crate::test_support::sample_document;

    #[test]
    fn canonical_document_passes_through_unchanged() {
        let value = serde_json::to_value(sample_document()).expect("serialize");
        assert_eq!(migrate_to_current(value.clone()), value);
    }

    #[test]
    fn first_revision_decodes_after_migration() {
        let legacy = serde_json::json!({
            "title": "Peshmerga: The Golden Square",
            "narrative": {
                "playerRole": "A Peshmerga commander",
                "storyArc": "From invasion to liberation.",
                "historicalFidelity": "Follows the real timeline."
            },
            "gameplayMechanics": [
                { "name": "Squad orders", "description": "Direct two companions." }
            ],
            "visualStyle": {
                "artStyle": "Photorealism",
                "colorPalette": "Dust and gold"
            },
            "locations": [
                { "name": "Erbil", "description": "The citadel city." }
            ],
            "missions": [
                { "title": "The Storm Breaks", "location": "Slemani",
                  "description": "Survive the first night." }
            ],
            "factions": [
                { "name": "The Black Banner", "description": "Irregulars." }
            ],
            "audio": {
                "soundtrack": "Duduk over war drums",
                "soundEffects": "Dry desert acoustics"
            }
        });

        let doc: ConceptDocument =
            serde_json::from_value(migrate_to_current(legacy)).expect("decode migrated");
        assert_eq!(doc.narrative.main_storyline, "From invasion to liberation.");
        assert_eq!(
            doc.gameplay_loop.unique_systems,
            vec!["Squad orders: Direct two companions.".to_string()]
        );
        assert_eq!(doc.enemy_factions.len(), 1);
        assert_eq!(doc.audio.moodboard.key_tracks[0].title, "Soundtrack");
        assert!(doc.characters.is_empty());
    }

    #[test]
    fn second_revision_vision_arrays_become_display_strings() {
        let mut value = serde_json::to_value(sample_document()).expect("serialize");
        value["coreGameVision"]["languages"] =
            serde_json::json!(["Sorani", "Kurmanji", "Arabic"]);
        value["coreGameVision"]["primaryMaps"] = serde_json::json!(["Slemani", "Erbil"]);

        let doc: ConceptDocument =
            serde_json::from_value(migrate_to_current(value)).expect("decode migrated");
        let vision = doc.core_game_vision.expect("vision survives");
        assert_eq!(vision.languages, "Sorani, Kurmanji, Arabic");
        assert_eq!(vision.primary_maps, "Slemani, Erbil");
    }

    #[test]
    fn fixed_field_trailer_becomes_ordered_parts() {
        let legacy = serde_json::json!({
            "openingShot": "Drone over a burning ridge.",
            "sirwanVO": "They came for our mountains.",
            "falconVO": "Your mountains will learn new prayers.",
            "actionCuts": ["A kite falls.", "A rifle bolt closes."],
            "titleCard": "PESHMERGA",
            "finalLine": "We do not leave."
        });
        let mut doc = Map::new();
        doc.insert("trailerScript".into(), legacy);
        lift_screenplay(&mut doc, "trailerScript", TRAILER_CUES);

        let script: crate::script::Screenplay =
            serde_json::from_value(doc["trailerScript"].clone()).expect("decode screenplay");
        let kinds: Vec<&str> = script.parts.iter().map(ScriptPart::kind).collect();
        assert_eq!(
            kinds,
            vec!["camera", "narration", "narration", "cut", "cut", "titleCard", "dialogue"]
        );
        assert_eq!(script.parts[1].speaker(), Some(("Sirwan", "Sorani")));
        assert_eq!(script.parts.last().map(ScriptPart::text), Some("We do not leave."));
    }

    #[test]
    fn fixed_key_bosses_become_a_list() {
        let mut doc = Map::new();
        doc.insert(
            "bossMechanics".into(),
            serde_json::json!({
                "theFalcon": {
                    "description": "A three-phase siege.",
                    "mechanics": ["Mortar call-ins"],
                    "finalMoment": "He releases his falcon."
                }
            }),
        );
        lift_boss_mechanics(&mut doc);

        let bosses = doc["bossMechanics"]["bosses"]
            .as_array()
            .expect("bosses list");
        assert_eq!(bosses.len(), 1);
        assert_eq!(bosses[0]["name"], "The Falcon");
    }

    #[test]
    fn weapon_type_field_is_renamed() {
        let mut doc = Map::new();
        doc.insert(
            "weapons".into(),
            serde_json::json!([{ "name": "Zagros DMR", "type": "Rifle" }]),
        );
        rename_type_to_kind(&mut doc, "weapons");
        assert_eq!(doc["weapons"][0]["kind"], "Rifle");
        assert!(doc["weapons"][0].get("type").is_none());
    }
}
