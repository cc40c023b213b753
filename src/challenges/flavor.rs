//! Cosmetic text. Every draw here comes from the flavor stream.

use crate::core::rng::pick;
use rand::Rng;

/// Placeholder names standing in for yesterday's answer.
pub const VARIABLE_NAMES: &[&str] = &["X", "Y", "Z", "A", "B", "Ω", "λ", "REQ", "VAL"];

pub const NARRATIVES: &[&str] = &[
    "Bit: 'I found a corruption in Sector 7... code looks like this.'",
    "Bit: 'The timeline is fraying. Stitch it back together.'",
    "Bit: 'System Alert: Logic failure detected. Please resolve.'",
    "Bit: 'Is this... algebra? I hate algebra. You do it.'",
    "Bit: 'Bypassing the MegaDrive security protocol...'",
    "Bit: 'It's dangerous to go alone! Take this equation.'",
    "Bit: 'Calculating jump trajectory... Press A to jump.'",
    "Bit: 'Error 404: Answer not found. Just kidding, it is here.'",
    "Bit: 'Blow into the cartridge if it doesn't load.'",
    "Bit: 'Prepare for Blast Processing!'",
    "Bit: 'The cake is a lie, but this math is real.'",
    "Bit: 'A winner is you! (If you solve this).'",
    "Bit: 'Hold Reset while turning off the power to save.'",
    "Bit: 'Hey! Listen! Solving this equation is key.'",
    "Bit: 'It is a secret to everybody.'",
    "Bit: 'Scavenged a pristine 6502 processor. Beautiful.'",
    "Bit: 'Found a Dreamcast in the rubble. It is still thinking.'",
    "Bit: 'We need more RAM. Check that N64 Expansion Pak.'",
];

pub const TUTORIAL_HINT: &str = "Welcome! Remember: The answer is 1.";
pub const CORRUPTION_HINT: &str =
    "Bit: 'Display corrupted! The result shown is false. Calculate the REAL answer!'";
pub const ARCADE_HINT: &str = "Bit: 'Solve it. Quickly.'";
pub const GLOBAL_DAILY_INTRO: &str = "System Override Initiated...";

pub fn variable_name<R: Rng>(rng: &mut R) -> &'static str {
    *pick(VARIABLE_NAMES, rng)
}

pub fn narrative<R: Rng>(rng: &mut R) -> &'static str {
    *pick(NARRATIVES, rng)
}

/// A reminder line for tomorrow, embedding the new solution.
pub fn success_line<R: Rng>(variable: &str, solution: i64, rng: &mut R) -> String {
    match rng.gen_range(0..10) {
        0 => format!("Bit: 'Good. {variable} is set to {solution}. Don't forget it.'"),
        1 => format!("Bit: 'System patched. Variable {variable} holding value {solution}.'"),
        2 => format!("Bit: 'Memory updated. {variable} = {solution}.'"),
        3 => format!("Bit: 'Keep {solution} in your buffer. We need it tomorrow.'"),
        4 => format!("Bit: 'Nice. {variable} is now {solution}. Write it down.'"),
        5 => format!("Bit: 'Store {solution} in your hippocampus, not on your hand.'"),
        6 => format!("Bit: 'I bet you'll forget {solution} by tomorrow. Just kidding (mostly).'"),
        7 => format!("Bit: '{variable} = {solution}. This will be on the test.'"),
        8 => format!("Bit: 'Memorize {solution}. Your streak depends on it. No pressure.'"),
        _ => format!("Bit: 'Psst... the answer is {solution}. Keep it secret.'"),
    }
}

/// Success line for an anniversary trivia answer.
pub fn anniversary_line<R: Rng>(year: i64, rng: &mut R) -> String {
    match rng.gen_range(0..3) {
        0 => format!("Bit: 'Correct! Today is the anniversary of {year}. History repeats itself.'"),
        1 => format!("Bit: 'Timeline verified: {year}. A special date in the archives.'"),
        _ => format!("Bit: 'Happy Anniversary to {year}. You remembered.'"),
    }
}
