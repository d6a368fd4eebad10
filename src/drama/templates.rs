//! Drama template bank.
//!
//! `{Q1}` is the primary contestant; `{Q2}`, where present, is a
//! distinct second party.

/// The fixed template bank drama events are drawn from.
pub const DRAMA_TEMPLATES: &[&str] = &[
    "{Q1} accused {Q2} of having someone else make her costume!",
    "{Q1} is crying alone because the judges hated her look.",
    "{Q1} and {Q2} got into a screaming match over a wig.",
    "{Q1} told {Q2} she has no talent and is just relying on her body.",
    "The queens are all annoyed with {Q1}'s constant excuses.",
    "{Q1} is delusional and thinks she won the challenge.",
    "{Q1} threw a drink at {Q2} in the interior illusions lounge!",
    "{Q1} stormed out of the lounge and {Q2} said, 'Don't let the door hit you!'.",
    "{Q1} started reading everyone for filth while fanning herself dramatically.",
    "{Q1} swears {Q2} copied her runway concept down to the rhinestones.",
    "{Q1} is pacing while {Q2} yells that she didn't come here to make friends.",
    "{Q1} whispered that {Q2} should have been in the bottom and chaos erupted.",
    "{Q1} won't stop singing the challenge song and {Q2} is losing it.",
    "{Q1} tried to hug {Q2}, but {Q2} told her to save the fake tears for the runway.",
    "{Q1} is plotting revenge with a lipstick message if she goes home.",
    "{Q1} is giving a motivational speech while {Q2} rolls her eyes in the background.",
    "{Q1} found {Q2}'s padding in the trash and the conspiracy theories are flying.",
    "{Q1} spilled a drink on {Q2}'s outfit and blamed it on nerves.",
    "{Q1} is manifesting a win and sage-smudging the lounge while {Q2} coughs dramatically.",
    "{Q1} called {Q2} out for coasting and the entire room went silent.",
    "{Q1} is practicing her exit speech even though {Q2} thinks she's safe.",
];
