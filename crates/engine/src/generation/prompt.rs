//! Prompt assembly for the one generation call the engine makes.
//!
//! The prompt is fixed: same persona, same creative brief, every call. All
//! variability in the output comes from the model, not from the inputs.

/// Persona the model answers as.
pub const SYSTEM_INSTRUCTION: &str = "You are the Maestro Architect: a world-class AAA game \
director, military historian, and cultural consultant. You design complete, production-ready \
game concepts in a single pass. You write with precision and restraint, you respect the \
cultures you depict, and you never leave a field empty or generic.";

/// The creative brief. The model must stay inside it: every fact in the
/// generated document should trace back to a line here.
pub const CREATIVE_BRIEF: &str = r#"CORE DIRECTIVE
Design "Peshmerga: The Golden Square", a grounded AAA first-person shooter about the
Peshmerga war against ISIS, 2014-2017. The tone is somber, heroic, and unsentimental.
Historical fidelity matters: real places, real timeline, dramatized combat.

SETTING
Primary maps: Slemani, Erbil, Duhok, Mosul, with Baghdad appearing in the story.
Languages spoken on screen: Sorani, Kurmanji, Arabic; English subtitles throughout.

CAMPAIGN
Four flagship missions, in order:
1. "The Storm Breaks" - Slemani. The first night of the offensive; survival defense.
2. "Shields of Erbil" - Erbil. Holding the western ridge against armored assault.
3. "Eagles of Duhok" - Duhok. Mountain reconnaissance and sniper overwatch.
4. "The Lion's Roar" - Mosul. The liberation campaign, street by street.
Give each mission a matching level blueprint: time of day, vibe, mission type, unique
mechanics, and one unforgettable key scene.

CHARACTERS
A squad of four: Sirwan (veteran commander, the player), Nadia (sniper), Araz (young
radioman), Shakar (machine gunner). Detail each well enough to brief a 3D modeler and a
voice actor: look, personality, battle style, signature line, spoken languages.
The villain is "The Falcon", an ISIS emir: chilling, articulate, specific.

SYSTEMS
Skill tree with three branches named Wolf, Lion, and Eagle, each with its own philosophy.
Weapon roster of period-correct small arms with full audio and physics treatment. Enemy
AI described for an AI programmer: patrol cycles, flanking, grenades, suppression, noise
reaction, fear and morale, a behavior tree, and explicit states and transitions.

AUDIO
Score built on Kurdish instruments: duduk, daf, zurna, against low strings and war
drums. Name the key tracks. Sound design favors dry desert acoustics and distance.

CINEMATICS
Write the announcement trailer and the opening cinematic as ordered screenplays built
from discriminated parts: narration, dialogue, action, camera, soundEffect, cut,
titleCard. Dialogue and narration must carry the speaking character and language.

AUTHENTICITY
Respect the people depicted. No invented atrocities, no cartoon villains, no generic
Middle East backdrop. Flags, patches, and dialects must be period-correct, and the
cultural authenticity checklist must say how that is verified."#;

/// Assemble the user prompt for a generation call. Deterministic.
pub fn assemble_user_prompt() -> String {
    format!(
        "Produce the complete game concept document described below. Fill every field of \
the response schema from the brief; invent nothing that contradicts it.\n\n{CREATIVE_BRIEF}"
    )
}
