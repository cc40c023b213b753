//! Special-case challenge overrides: anniversary trivia, corrupted displays,
//! and rare collectibles keyed to specific solutions.

use super::flavor::{self, CORRUPTION_HINT};
use super::types::{Challenge, DifficultyTier, Equation, Operand, Operator};
use crate::core::constants::{
    CORRUPTION_CADENCE, CORRUPTION_MIN_DAY, CORRUPTION_MIN_OFFSET, CORRUPTION_SPREAD,
    NOKIA_FORCED_CHANCE, NOKIA_FORCED_MIN_DAY, NOKIA_TARGET,
};
use crate::core::rng::{pick, CalendarDay, ChallengeRng};
use rand::Rng;

/// A historical date whose anniversary swaps the arithmetic puzzle for trivia.
#[derive(Debug, Clone)]
pub struct Anniversary {
    pub date: CalendarDay,
    pub question: &'static str,
    pub answer: i64,
    pub clue: &'static str,
}

pub const ANNIVERSARY_UNLOCK_ID: &str = "anniversary_token";

pub const ANNIVERSARIES: &[Anniversary] = &[
    Anniversary {
        date: CalendarDay::new(7, 20),
        question: "Apollo 11 Moon Landing (Year)",
        answer: 1969,
        clue: "One giant leap for mankind.",
    },
    Anniversary {
        date: CalendarDay::new(10, 18),
        question: "NES Release Year (North America)",
        answer: 1985,
        clue: "It revived the industry.",
    },
    Anniversary {
        date: CalendarDay::new(7, 31),
        question: "Game Boy Release Year (NA)",
        answer: 1989,
        clue: "Tetris in your pocket.",
    },
    Anniversary {
        date: CalendarDay::new(8, 6),
        question: "First Web Page Live (Year)",
        answer: 1991,
        clue: "The internet became for everyone.",
    },
    Anniversary {
        date: CalendarDay::new(5, 22),
        question: "Pac-Man Arcade Release (Year)",
        answer: 1980,
        clue: "Waka waka waka.",
    },
    Anniversary {
        date: CalendarDay::new(6, 23),
        question: "Super Mario 64 Release (Year)",
        answer: 1996,
        clue: "Welcome to the 3rd dimension.",
    },
    Anniversary {
        date: CalendarDay::new(6, 29),
        question: "First iPhone Release (Year)",
        answer: 2007,
        clue: "This changed everything.",
    },
    Anniversary {
        date: CalendarDay::new(1, 1),
        question: "Y2K Bug Scare (Year)",
        answer: 2000,
        clue: "The computers might crash.",
    },
    Anniversary {
        date: CalendarDay::new(8, 24),
        question: "Windows 95 Release (Year)",
        answer: 1995,
        clue: "Start Me Up.",
    },
    Anniversary {
        date: CalendarDay::new(3, 31),
        question: "Matrix Movie Release (Year)",
        answer: 1999,
        clue: "There is no spoon.",
    },
];

pub fn find_anniversary(today: CalendarDay) -> Option<&'static Anniversary> {
    ANNIVERSARIES.iter().find(|a| a.date == today)
}

/// Build the trivia challenge for an anniversary.
pub fn anniversary_challenge(
    id: String,
    anniversary: &Anniversary,
    rng: &mut ChallengeRng,
) -> Challenge {
    Challenge {
        id,
        expression: anniversary.question.to_string(),
        equation: None,
        solution: anniversary.answer,
        difficulty_tier: DifficultyTier::Special,
        hint: Some(format!(
            "Bit: 'TODAY'S SPECIAL EVENT: {}'",
            anniversary.clue
        )),
        success_text: Some(flavor::anniversary_line(anniversary.answer, &mut rng.flavor)),
        rare_unlock_id: Some(ANNIVERSARY_UNLOCK_ID.to_string()),
        is_corrupted: false,
        displayed_result: None,
    }
}

pub fn is_corruption_day(day_index: u32) -> bool {
    day_index > CORRUPTION_MIN_DAY && day_index % CORRUPTION_CADENCE == 0
}

/// Overlay a false displayed result. The solution is untouched.
pub fn corrupt(mut challenge: Challenge, rng: &mut ChallengeRng) -> Challenge {
    let noise = rng.gameplay.gen_range(0..CORRUPTION_SPREAD);
    challenge.displayed_result = Some(challenge.solution + CORRUPTION_MIN_OFFSET + noise);
    challenge.is_corrupted = true;
    challenge.hint = Some(CORRUPTION_HINT.to_string());
    challenge
}

/// A rare artifact granted when the computed solution lands on a target.
#[derive(Debug, Clone)]
pub struct Collectible {
    pub unlock_id: &'static str,
    pub targets: &'static [i64],
    pub min_day: u32,
    /// Extra gate drawn from the gameplay stream once the target matches.
    pub chance: Option<f64>,
    pub hint: &'static str,
    pub success_lines: &'static [&'static str],
}

impl Collectible {
    fn matches(&self, solution: i64, day_index: u32) -> bool {
        day_index >= self.min_day && self.targets.contains(&solution)
    }
}

pub const NOKIA: Collectible = Collectible {
    unlock_id: "nokia3210",
    targets: &[NOKIA_TARGET],
    min_day: 99,
    chance: None,
    hint: "Bit: 'Hmm, this equation looks... familiar somehow. Almost like a phone number...'",
    success_lines: &[
        "Bit: 'Wait... 3210? You found it! The legendary Nokia 3210!'",
        "Bit: 'No way... THE NOKIA 3210?! I heard this phone survived falling from space.'",
        "Bit: '3210! My old friend! It'll be Nokias and Twinkies after the apocalypse.'",
    ],
};

const NOKIA_FORCED_HINT: &str =
    "Bit: 'I'm getting a strange signal on this frequency... 3... 2... 1... 0...'";

/// Evaluated in order; the first match wins.
pub const COLLECTIBLES: &[Collectible] = &[
    Collectible {
        unlock_id: "tamagotchi",
        targets: &[1996, 1997],
        min_day: 96,
        chance: None,
        hint: "Bit: 'Hmm, this equation gives me nostalgic pet vibes... beep... beep...'",
        success_lines: &[
            "Bit: 'Wait... is that... a TAMAGOTCHI?! I hope you keep it alive better than I did.'",
            "Bit: 'A Tamagotchi! These taught a generation about responsibility. And loss.'",
        ],
    },
    Collectible {
        unlock_id: "charred_elmo",
        targets: &[1996],
        min_day: 50,
        chance: Some(0.5),
        hint: "Bit: 'Do you smell... smoke? And... giggling?'",
        success_lines: &["Bit: 'Is that... a CHARRED TICKLE ME ELMO?! WHY IS IT STILL GIGGLING?!'"],
    },
    Collectible {
        unlock_id: "scorched_furby",
        targets: &[1998],
        min_day: 30,
        chance: None,
        hint: "Bit: 'I sense something... ancient. Something that speaks in tongues...'",
        success_lines: &[
            "Bit: 'OH NO. A SCORCHED FURBY. It's still blinking at me.'",
            "Bit: 'This Furby survived a microwave incident. Its eyes glow different now.'",
        ],
    },
    Collectible {
        unlock_id: "teddy_ruxpin",
        targets: &[1985, 85],
        min_day: 20,
        chance: None,
        hint: "Bit: 'I hear a faint mechanical voice... telling stories I don't remember...'",
        success_lines: &["Bit: 'A HAUNTED TEDDY RUXPIN?! Its jaw is moving but no tape is playing.'"],
    },
    Collectible {
        unlock_id: "rubiks_cube",
        targets: &[1980, 80],
        min_day: 15,
        chance: None,
        hint: "Bit: 'This equation has... many sides to it...'",
        success_lines: &["Bit: 'A Rubik's Cube! Unsolved since 1982. It's generational trauma now.'"],
    },
    Collectible {
        unlock_id: "aol_cd",
        targets: &[1995, 95],
        min_day: 25,
        chance: None,
        hint: "Bit: 'I hear a dial-up sound... it's connecting... still connecting...'",
        success_lines: &["Bit: 'AN AOL CD?! \"1000 FREE HOURS!\" They make excellent coasters.'"],
    },
    Collectible {
        unlock_id: "clippy",
        targets: &[1997, 97],
        min_day: 30,
        chance: None,
        hint: "Bit: 'It looks like you're trying to solve an equation...'",
        success_lines: &["Bit: 'CLIPPY?! \"Would you like help?\" NO CLIPPY. GO AWAY.'"],
    },
    Collectible {
        unlock_id: "y2k_bug",
        targets: &[2000],
        min_day: 40,
        chance: None,
        hint: "Bit: '99... 99... 100! Wait, everything is fine?'",
        success_lines: &["Bit: 'Y2K BUG DETECTED! ...Wait, we made it? Those bunkers were for NOTHING?!'"],
    },
    Collectible {
        unlock_id: "ipod_classic",
        targets: &[2001],
        min_day: 35,
        chance: None,
        hint: "Bit: 'I'm getting white earbuds vibes from this equation...'",
        success_lines: &["Bit: 'AN iPOD?! \"1000 songs in your pocket!\" We felt SO COOL.'"],
    },
    Collectible {
        unlock_id: "myspace_tom",
        targets: &[2003],
        min_day: 25,
        chance: None,
        hint: "Bit: 'This equation wants to be in your Top 8...'",
        success_lines: &["Bit: 'MYSPACE TOM! Everyone's first friend! Legend.'"],
    },
    Collectible {
        unlock_id: "heelys",
        targets: &[2000, 0],
        min_day: 10,
        chance: None,
        hint: "Bit: 'This equation is really... rolling along...'",
        success_lines: &["Bit: 'HEELYS! Half shoe, half wheel, banned in every establishment.'"],
    },
    Collectible {
        unlock_id: "pi_badge",
        targets: &[314, 31],
        min_day: 10,
        chance: None,
        hint: "Bit: 'This equation is going in circles... infinitely...'",
        success_lines: &["Bit: 'PI! 3.14159265358979... I could go on. I won't. But I COULD.'"],
    },
    Collectible {
        unlock_id: "euler_number",
        targets: &[271, 27],
        min_day: 15,
        chance: None,
        hint: "Bit: 'This equation grows... naturally...'",
        success_lines: &["Bit: 'EULER'S NUMBER! e = 2.71828... The base of natural logarithms!'"],
    },
    Collectible {
        unlock_id: "fibonacci_spiral",
        targets: &[89, 144, 233],
        min_day: 20,
        chance: None,
        hint: "Bit: 'This equation feels... golden...'",
        success_lines: &["Bit: 'FIBONACCI! 1, 1, 2, 3, 5, 8, 13... It's EVERYWHERE.'"],
    },
    Collectible {
        unlock_id: "apollo_11_patch",
        targets: &[1969, 69, 11],
        min_day: 15,
        chance: None,
        hint: "Bit: 'Houston, we have an equation...'",
        success_lines: &["Bit: 'APOLLO 11! They calculated that trajectory BY HAND.'"],
    },
    Collectible {
        unlock_id: "apollo_13_patch",
        targets: &[1970, 70, 13],
        min_day: 20,
        chance: None,
        hint: "Bit: 'Houston, we have a... different kind of problem...'",
        success_lines: &["Bit: 'APOLLO 13! The successful failure. They duct-taped their way home.'"],
    },
    Collectible {
        unlock_id: "turing_machine",
        targets: &[1936, 36, 1912, 12],
        min_day: 25,
        chance: None,
        hint: "Bit: 'Can machines think? ...Can YOU think? Deep questions.'",
        success_lines: &["Bit: 'ALAN TURING! The father of computer science. I owe him everything.'"],
    },
    Collectible {
        unlock_id: "deep_blue_chip",
        targets: &[1997],
        min_day: 40,
        chance: Some(0.3),
        hint: "Bit: 'Checkmate? Or is it just the beginning...'",
        success_lines: &["Bit: 'DEEP BLUE! It beat Kasparov in 1997. The machines started winning that day.'"],
    },
    Collectible {
        unlock_id: "einstein_equation",
        targets: &[1905],
        min_day: 30,
        chance: None,
        hint: "Bit: 'Everything is relative... especially this equation...'",
        success_lines: &["Bit: 'E = MC²! 1905! Einstein's miracle year!'"],
    },
    Collectible {
        unlock_id: "eniac_vacuum_tube",
        targets: &[1945, 45],
        min_day: 35,
        chance: None,
        hint: "Bit: 'This equation requires... 30 tons of processing power...'",
        success_lines: &["Bit: 'ENIAC! It weighed 30 TONS. Your phone laughs at it.'"],
    },
    Collectible {
        unlock_id: "arpanet_node",
        targets: &[1969, 69],
        min_day: 30,
        chance: Some(0.3),
        hint: "Bit: 'Connecting... connecting... CONNECTION ESTABLISHED.'",
        success_lines: &["Bit: 'ARPANET! First message was \"LO\" because it crashed before \"LOGIN.\"'"],
    },
];

/// Attach a collectible to `challenge` in place.
fn attach(challenge: &mut Challenge, collectible: &Collectible, rng: &mut ChallengeRng) {
    challenge.rare_unlock_id = Some(collectible.unlock_id.to_string());
    challenge.hint = Some(collectible.hint.to_string());
    challenge.success_text = Some(pick(collectible.success_lines, &mut rng.flavor).to_string());
}

/// Apply the first matching collectible, including the forced Nokia roll.
/// The arithmetic contract is preserved: a forced Nokia rewrites the
/// equation so that it still evaluates to its new solution.
pub fn apply_collectibles(
    mut challenge: Challenge,
    day_index: u32,
    previous_solution: i64,
    lhs: Operand,
    easy_mode: bool,
    rng: &mut ChallengeRng,
) -> Challenge {
    if NOKIA.matches(challenge.solution, day_index) {
        attach(&mut challenge, &NOKIA, rng);
        return challenge;
    }

    if day_index >= NOKIA_FORCED_MIN_DAY
        && !easy_mode
        && rng.gameplay.gen::<f64>() < NOKIA_FORCED_CHANCE
    {
        let delta = NOKIA_TARGET.saturating_sub(previous_solution);
        let equation = Equation {
            lhs,
            operator: if delta >= 0 {
                Operator::Add
            } else {
                Operator::Subtract
            },
            rhs: delta.saturating_abs(),
        };
        challenge.expression = equation.to_string();
        challenge.equation = Some(equation);
        challenge.solution = NOKIA_TARGET;
        challenge.difficulty_tier = DifficultyTier::Special;
        attach(&mut challenge, &NOKIA, rng);
        challenge.hint = Some(NOKIA_FORCED_HINT.to_string());
        return challenge;
    }

    for collectible in COLLECTIBLES {
        if !collectible.matches(challenge.solution, day_index) {
            continue;
        }
        if let Some(chance) = collectible.chance {
            if rng.gameplay.gen::<f64>() >= chance {
                continue;
            }
        }
        attach(&mut challenge, collectible, rng);
        return challenge;
    }

    challenge
}

/// Every artifact id an override can grant.
pub fn override_unlock_ids() -> impl Iterator<Item = &'static str> {
    std::iter::once(NOKIA.unlock_id)
        .chain(std::iter::once(ANNIVERSARY_UNLOCK_ID))
        .chain(COLLECTIBLES.iter().map(|c| c.unlock_id))
}
