//! Data-quality audit for Concept Documents.
//!
//! Defects are advisory, not errors: a document with duplicate mission titles
//! still renders (in listed order), but the caller should log what it found.
//! Records are keyed by display name, so empty and duplicate keys are the
//! main hazards; screenplays add the missing-speaker case.

use std::collections::HashSet;

use crate::document::{ConceptDocument, DisplayKey};
use crate::script::{Screenplay, ScriptPart};

/// One advisory finding from [`audit`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Defect {
    #[error("{collection}[{index}] has an empty display name")]
    EmptyDisplayKey {
        collection: &'static str,
        index: usize,
    },
    #[error("{collection} contains duplicate entry {key:?}")]
    DuplicateDisplayKey {
        collection: &'static str,
        key: String,
    },
    /// A dialogue or narration part with an empty character or language.
    #[error("{section} part {index} is spoken but has no speaker or language")]
    IncompleteSpeaker {
        section: &'static str,
        index: usize,
    },
}

/// Audit a document for data-quality defects. Order of findings follows
/// document order.
pub fn audit(doc: &ConceptDocument) -> Vec<Defect> {
    let mut defects = Vec::new();

    check_keys(&mut defects, "locations", &doc.locations);
    check_keys(&mut defects, "missions", &doc.missions);
    check_keys(&mut defects, "characters", &doc.characters);
    check_keys(&mut defects, "weapons", &doc.weapons);
    check_keys(&mut defects, "equipment", &doc.equipment);
    check_keys(&mut defects, "enemyFactions", &doc.enemy_factions);
    check_keys(&mut defects, "audio.keyTracks", &doc.audio.moodboard.key_tracks);
    if let Some(architecture) = &doc.technical_architecture {
        check_keys(
            &mut defects,
            "technicalArchitecture.coreSystems",
            &architecture.core_systems,
        );
    }
    if let Some(blueprints) = &doc.level_blueprints {
        check_keys(&mut defects, "levelBlueprints", blueprints);
    }
    if let Some(tree) = &doc.skill_tree {
        check_keys(&mut defects, "skillTree.branches", &tree.branches);
    }
    if let Some(mechanics) = &doc.boss_mechanics {
        check_keys(&mut defects, "bossMechanics.bosses", &mechanics.bosses);
    }
    if let Some(prompts) = &doc.concept_art_prompts {
        check_keys(&mut defects, "conceptArtPrompts", prompts);
    }

    if let Some(script) = &doc.trailer_script {
        check_speakers(&mut defects, "trailerScript", script);
    }
    if let Some(script) = &doc.opening_cinematic {
        check_speakers(&mut defects, "openingCinematic", script);
    }

    defects
}

fn check_keys<T: DisplayKey>(defects: &mut Vec<Defect>, collection: &'static str, items: &[T]) {
    let mut seen = HashSet::new();
    for (index, item) in items.iter().enumerate() {
        let key = item.display_key().trim();
        if key.is_empty() {
            defects.push(Defect::EmptyDisplayKey { collection, index });
            continue;
        }
        if !seen.insert(key) {
            defects.push(Defect::DuplicateDisplayKey {
                collection,
                key: key.to_string(),
            });
        }
    }
}

fn check_speakers(defects: &mut Vec<Defect>, section: &'static str, script: &Screenplay) {
    for (index, part) in script.parts.iter().enumerate() {
        if let ScriptPart::Dialogue {
            character, language, ..
        }
        | ScriptPart::Narration {
            character, language, ..
        } = part
        {
            if character.trim().is_empty() || language.trim().is_empty() {
                defects.push(Defect::IncompleteSpeaker { section, index });
            }
        }
    }
}
