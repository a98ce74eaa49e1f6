//! Team roster data.
//!
//! Compile-time-known records rendered on the team page. The first
//! entry is the project mentor, shown in its own section.

/// Optional social profile links for a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Socials {
    pub twitter: Option<&'static str>,
    pub linkedin: Option<&'static str>,
    pub github: Option<&'static str>,
}

impl Socials {
    const NONE: Self = Self {
        twitter: None,
        linkedin: None,
        github: None,
    };
}

/// One team member record.
///
/// `image` is a file name resolved against the deployed image
/// directory at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Person {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
    pub socials: Socials,
}

/// Full roster, mentor first.
const PEOPLE: &[Person] = &[
    Person {
        name: "Dr. Rajesh Gupta",
        role: "Mentor",
        image: "rajesh.jpg",
        bio: "Founding Director at HDSI. Distinguished Professor at UCSD.",
        socials: Socials {
            linkedin: Some("https://linkedin.com/in/rajeshgupta4"),
            ..Socials::NONE
        },
    },
    Person {
        name: "Kai Breese",
        role: "Hardware Guy",
        image: "kai.jpg",
        bio: "Exp. March 2025",
        socials: Socials {
            linkedin: Some("https://linkedin.com/in/kaibreese"),
            github: Some("https://github.com/ninjakaib"),
            ..Socials::NONE
        },
    },
    Person {
        name: "Justin Chou",
        role: "Swiss Army Knife",
        image: "justin.jpg",
        bio: "Exp. December 2025",
        socials: Socials {
            linkedin: Some("https://www.linkedin.com/in/justintchou/"),
            github: Some("https://github.com/nakschou"),
            ..Socials::NONE
        },
    },
    Person {
        name: "Katelyn Abille",
        role: "Designer",
        image: "katelyn.jpg",
        bio: "Exp. June 2025",
        socials: Socials {
            linkedin: Some("https://linkedin.com/in/katelynmaea"),
            github: Some("https://github.com/katemae"),
            ..Socials::NONE
        },
    },
    Person {
        name: "Lukas Fullner",
        role: "Verilog Enthusiast",
        image: "lukas.jpg",
        bio: "Exp. June 2025",
        socials: Socials {
            linkedin: Some("https://linkedin.com/in/lukas-fullner-172639284"),
            github: Some("https://github.com/Lwizard3"),
            ..Socials::NONE
        },
    },
];

/// The project mentor.
pub fn mentor() -> &'static Person {
    &PEOPLE[0]
}

/// Team members, mentor excluded.
pub fn members() -> &'static [Person] {
    &PEOPLE[1..]
}
