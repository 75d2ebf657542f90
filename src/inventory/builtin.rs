//! Built-in inventories
//!
//! - `tipi`: Ten-Item Personality Inventory (Gosling, Rentfrow & Swann, 2003), 7-point scale
//! - `bfi-44`: Big Five Inventory (John & Srivastava, 1999), 5-point scale

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use super::narrative::{Category, NarrativeEntry, NarrativeTable};
use super::scale::LikertScale;
use super::traits::Trait;
use super::{Inventory, Item};

static BUILTINS: Lazy<Vec<Inventory>> = Lazy::new(|| vec![tipi(), bfi44()]);

/// All built-in inventories
pub fn all() -> &'static [Inventory] {
    &BUILTINS
}

/// Look up a built-in inventory by id
pub fn get(id: &str) -> Option<&'static Inventory> {
    BUILTINS.iter().find(|inv| inv.id.eq_ignore_ascii_case(id))
}

type Band<'a> = (&'a str, &'a str, Option<&'a str>);

fn bands(high: Band, moderately_high: Band, moderately_low: Band, low: Band) -> IndexMap<Category, NarrativeEntry> {
    [
        (Category::High, high),
        (Category::ModeratelyHigh, moderately_high),
        (Category::ModeratelyLow, moderately_low),
        (Category::Low, low),
    ]
    .into_iter()
    .map(|(category, (text, example, character))| (category, NarrativeEntry::new(text, example, character)))
    .collect()
}

fn tipi() -> Inventory {
    use Trait::*;

    let items = vec![
        Item::new("Extraverted, enthusiastic", Extraversion, false),
        Item::new("Reserved, quiet", Extraversion, true),
        Item::new("Sympathetic, warm", Agreeableness, false),
        Item::new("Critical, quarrelsome", Agreeableness, true),
        Item::new("Dependable, self-disciplined", Conscientiousness, false),
        Item::new("Disorganized, careless", Conscientiousness, true),
        Item::new("Anxious, easily upset", EmotionalStability, true),
        Item::new("Calm, emotionally stable", EmotionalStability, false),
        Item::new("Open to new experiences, complex", Openness, false),
        Item::new("Conventional, uncreative", Openness, true),
    ];

    let mut narratives = NarrativeTable::new();
    narratives.insert(
        Extraversion,
        bands(
            (
                "You are sociable, assertive, talkative, and active (extraverted and enthusiastic).",
                "You organized a lively group discussion and effortlessly engaged everyone.",
                Some("Tony Stark (Iron Man)"),
            ),
            (
                "You are generally sociable and energetic, though sometimes reserved.",
                "You join parties and chat, but occasionally take a step back to observe.",
                Some("Peter Quill (Star-Lord)"),
            ),
            (
                "You show some sociability but often prefer quieter activities.",
                "You enjoy small gatherings and one-on-one conversations over big crowds.",
                Some("Bilbo Baggins"),
            ),
            (
                "You tend to be reserved, quiet, and introspective.",
                "You often stay silent at social events, preferring to listen and reflect.",
                Some("Bruce Wayne (Batman)"),
            ),
        ),
    );
    narratives.insert(
        Agreeableness,
        bands(
            (
                "You are trusting, generous, sympathetic, and cooperative (sympathetic and warm).",
                "You volunteered to help a friend move without hesitation.",
                Some("Samwise Gamgee"),
            ),
            (
                "You’re mostly warm and cooperative, but can critically appraise when needed.",
                "You offer support but speak up if you notice a mistake in the plan.",
                Some("Hermione Granger"),
            ),
            (
                "You balance kindness with a tendency to point out faults.",
                "You help colleagues but don’t shy away from constructive feedback.",
                Some("Tyrion Lannister"),
            ),
            (
                "You may be critical, quarrelsome, and competitive.",
                "You frequently challenge others’ ideas during debates.",
                Some("Dr. Gregory House"),
            ),
        ),
    );
    narratives.insert(
        Conscientiousness,
        bands(
            (
                "You are organized, hardworking, responsible, and self-disciplined (dependable).",
                "You created a detailed schedule and followed it meticulously.",
                Some("Hermione Granger"),
            ),
            (
                "You’re usually reliable and organized, with occasional spontaneity.",
                "You prepare for deadlines but sometimes take breaks to improvise.",
                Some("Indiana Jones"),
            ),
            (
                "You plan ahead but sometimes act more impulsively or carelessly.",
                "You set goals but occasionally rush tasks at the last minute.",
                Some("Jack Sparrow"),
            ),
            (
                "You may be disorganized, careless, and impulsive.",
                "You often miss appointments and leave tasks unfinished.",
                Some("Deadpool"),
            ),
        ),
    );
    narratives.insert(
        EmotionalStability,
        bands(
            (
                "You are relaxed, confident, and emotionally stable (calm).",
                "You remained composed during a crisis, making clear decisions.",
                Some("Superman"),
            ),
            (
                "You tend to stay calm and confident but may occasionally feel stressed.",
                "You handled a tight deadline well, with only brief moments of worry.",
                Some("Katniss Everdeen"),
            ),
            (
                "You manage stress fairly well but sometimes feel anxious or moody.",
                "You completed most tasks under pressure but had moments of doubt.",
                Some("Frodo Baggins"),
            ),
            (
                "You may be anxious, moody, and easily upset.",
                "You often react strongly to criticism and withdraw when upset.",
                Some("Sheldon Cooper"),
            ),
        ),
    );
    narratives.insert(
        Openness,
        bands(
            (
                "You are curious, imaginative, reflective, and creative (open to new experiences).",
                "You designed an original art project exploring abstract ideas.",
                Some("Doctor Strange"),
            ),
            (
                "You enjoy new ideas and creativity, though you also value routine.",
                "You try new recipes but still stick to your favorite meals regularly.",
                Some("Alice (Alice in Wonderland)"),
            ),
            (
                "You’re open to some new experiences but also prefer familiar approaches.",
                "You read diverse genres but often return to your favorite authors.",
                Some("Jim Halpert"),
            ),
            (
                "You prefer conventional approaches and familiar experiences.",
                "You follow established routines and avoid experimental ideas.",
                Some("Darth Vader"),
            ),
        ),
    );

    Inventory {
        id: "tipi".to_string(),
        name: "Ten-Item Personality Inventory (TIPI)".to_string(),
        description: "Ten adjective pairs rated on a 7-point scale; two items per Big Five trait.".to_string(),
        stem: "I see myself as:".to_string(),
        scale: LikertScale::new(
            7,
            &[
                "Disagree strongly",
                "Disagree moderately",
                "Disagree a little",
                "Neither agree nor disagree",
                "Agree a little",
                "Agree moderately",
                "Agree strongly",
            ],
        ),
        thresholds: None,
        items,
        narratives,
        closing: "Based on these results, write a short, friendly personality profile, compare me with the \
                  fictional counterparts listed, and suggest how I can play to my strengths."
            .to_string(),
    }
}

fn bfi44() -> Inventory {
    use Trait::*;

    let items = vec![
        Item::new("Is talkative", Extraversion, false),
        Item::new("Tends to find fault with others", Agreeableness, true),
        Item::new("Does a thorough job", Conscientiousness, false),
        Item::new("Is depressed, blue", Neuroticism, false),
        Item::new("Is original, comes up with new ideas", Openness, false),
        Item::new("Is reserved", Extraversion, true),
        Item::new("Is helpful and unselfish with others", Agreeableness, false),
        Item::new("Can be somewhat careless", Conscientiousness, true),
        Item::new("Is relaxed, handles stress well", Neuroticism, true),
        Item::new("Is curious about many different things", Openness, false),
        Item::new("Is full of energy", Extraversion, false),
        Item::new("Starts quarrels with others", Agreeableness, true),
        Item::new("Is a reliable worker", Conscientiousness, false),
        Item::new("Can be tense", Neuroticism, false),
        Item::new("Is ingenious, a deep thinker", Openness, false),
        Item::new("Generates a lot of enthusiasm", Extraversion, false),
        Item::new("Has a forgiving nature", Agreeableness, false),
        Item::new("Tends to be disorganized", Conscientiousness, true),
        Item::new("Worries a lot", Neuroticism, false),
        Item::new("Has an active imagination", Openness, false),
        Item::new("Tends to be quiet", Extraversion, true),
        Item::new("Is generally trusting", Agreeableness, false),
        Item::new("Tends to be lazy", Conscientiousness, true),
        Item::new("Is emotionally stable, not easily upset", Neuroticism, true),
        Item::new("Is inventive", Openness, false),
        Item::new("Has an assertive personality", Extraversion, false),
        Item::new("Can be cold and aloof", Agreeableness, true),
        Item::new("Perseveres until the task is finished", Conscientiousness, false),
        Item::new("Can be moody", Neuroticism, false),
        Item::new("Values artistic, aesthetic experiences", Openness, false),
        Item::new("Is sometimes shy, inhibited", Extraversion, true),
        Item::new("Is considerate and kind to almost everyone", Agreeableness, false),
        Item::new("Does things efficiently", Conscientiousness, false),
        Item::new("Remains calm in tense situations", Neuroticism, true),
        Item::new("Prefers work that is routine", Openness, true),
        Item::new("Is outgoing, sociable", Extraversion, false),
        Item::new("Is sometimes rude to others", Agreeableness, true),
        Item::new("Makes plans and follows through with them", Conscientiousness, false),
        Item::new("Gets nervous easily", Neuroticism, false),
        Item::new("Likes to reflect, play with ideas", Openness, false),
        Item::new("Has few artistic interests", Openness, true),
        Item::new("Likes to cooperate with others", Agreeableness, false),
        Item::new("Is easily distracted", Conscientiousness, true),
        Item::new("Is sophisticated in art, music, or literature", Openness, false),
    ];

    let mut narratives = NarrativeTable::new();
    narratives.insert(
        Extraversion,
        bands(
            (
                "You draw energy from other people and are talkative, assertive, and enthusiastic.",
                "You introduce yourself to strangers at a conference and leave with plans for dinner.",
                None,
            ),
            (
                "You are outgoing in most settings but also value time on your own.",
                "You enjoy a team lunch but prefer to spend the evening quietly.",
                None,
            ),
            (
                "You are comfortable socially yet tend to hold back in larger groups.",
                "You speak up in a meeting with a few colleagues but stay quiet in an all-hands.",
                None,
            ),
            (
                "You are reserved and quiet, and you recharge best alone.",
                "You would rather read at home than attend a crowded party.",
                None,
            ),
        ),
    );
    narratives.insert(
        Agreeableness,
        bands(
            (
                "You are trusting, forgiving, and kind, and you work hard to keep the peace.",
                "You give a colleague the benefit of the doubt after a missed deadline.",
                None,
            ),
            (
                "You are cooperative and considerate, while still standing your ground when it matters.",
                "You help a teammate with their task but push back on an unfair request.",
                None,
            ),
            (
                "You are fair-minded but quick to notice and name other people's mistakes.",
                "You point out the flaws in a proposal before offering to help improve it.",
                None,
            ),
            (
                "You are skeptical and blunt, and you enjoy competition and argument.",
                "You challenge every assumption in a discussion, even when it causes friction.",
                None,
            ),
        ),
    );
    narratives.insert(
        Conscientiousness,
        bands(
            (
                "You are thorough, reliable, and efficient, and you finish what you start.",
                "You break a large project into milestones and hit every one of them.",
                None,
            ),
            (
                "You are dependable and organized, with some room for spontaneity.",
                "You keep a to-do list but happily drop it for an unexpected opportunity.",
                None,
            ),
            (
                "You intend to plan ahead but are easily distracted or rushed.",
                "You start a report early but still finish it the night before it is due.",
                None,
            ),
            (
                "You are spontaneous and flexible, but can be careless or disorganized.",
                "You often misplace your keys and forget appointments.",
                None,
            ),
        ),
    );
    narratives.insert(
        Neuroticism,
        bands(
            (
                "You feel emotions intensely and are prone to worry, tension, and moodiness.",
                "You lie awake replaying a minor disagreement from earlier in the day.",
                None,
            ),
            (
                "You are sensitive to stress and sometimes feel anxious or low.",
                "You get nervous before presentations even when well prepared.",
                None,
            ),
            (
                "You are mostly calm, though pressure occasionally gets to you.",
                "You stay composed during a busy week but feel tense when plans change suddenly.",
                None,
            ),
            (
                "You are relaxed, emotionally stable, and handle stress well.",
                "You remain calm and focused when a flight is cancelled at the last minute.",
                None,
            ),
        ),
    );
    narratives.insert(
        Openness,
        bands(
            (
                "You are imaginative, curious, and inventive, with strong artistic interests.",
                "You spend a weekend teaching yourself an unfamiliar musical instrument.",
                None,
            ),
            (
                "You enjoy new ideas and art but also appreciate the familiar.",
                "You visit a new museum exhibit and then head to your usual cafe.",
                None,
            ),
            (
                "You prefer practical, proven approaches, with occasional curiosity.",
                "You stick with the tools you know, trying something new only when it clearly helps.",
                None,
            ),
            (
                "You value routine and convention over novelty and abstraction.",
                "You order the same dish at your favorite restaurant every time.",
                None,
            ),
        ),
    );

    Inventory {
        id: "bfi-44".to_string(),
        name: "Big Five Inventory (BFI-44)".to_string(),
        description: "Forty-four short statements rated on a 5-point scale; eight to ten items per trait.".to_string(),
        stem: "I see myself as someone who...".to_string(),
        scale: LikertScale::new(
            5,
            &[
                "Disagree strongly",
                "Disagree a little",
                "Neither agree nor disagree",
                "Agree a little",
                "Agree strongly",
            ],
        ),
        thresholds: None,
        items,
        narratives,
        closing: "Based on these results, write a balanced personality profile covering strengths and growth \
                  areas for each trait, and suggest work and study habits that suit me."
            .to_string(),
    }
}
