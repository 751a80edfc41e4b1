//! Static site content: services, team, testimonials, plate videos.
//!
//! Kept out of the page components so the markup stays declarative.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoRef {
    /// Hosted video id; empty means the slot renders a placeholder
    /// card instead of an embed.
    pub id: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub desc: &'static str,
    pub quote: &'static str,
    pub author: &'static str,
    pub videos: &'static [VideoRef],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub id: usize,
    pub name: &'static str,
    pub role: &'static str,
    pub photo: &'static str,
    pub bio: &'static str,
    pub interview_url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub text: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
}

pub const SHOWREEL_URL: &str = "https://rutube.ru/video/fa1b2c3d4e5f60718293a4b5c6d7e8f9/";

/// Featured embed in the stabilization tech block.
pub const STABILIZATION_VIDEO_ID: &str = "452b2990c39ef3aa481ccddb3e01b80c";

/// Featured embed in the rain-deflector tech block.
pub const DEFLECTOR_VIDEO_ID: &str = "5613cbfd38afa4b6ab28d3ca843f12cb";

pub const PLATE_VIDEOS: &[VideoRef] = &[
    VideoRef {
        id: "0bf9939bf26845f4c93244c161f50e7c",
        title: "The full workflow, start to finish",
    },
    VideoRef {
        id: "7907fcc43c0bc83768ede78e982dc72c",
        title: "Our plates in film and advertising",
    },
    VideoRef {
        id: "8fed3f1f0b9d9a2f39beff582ef9b91a",
        title: "What producers save",
    },
    VideoRef {
        id: "58bc3edcfb694e2d38fd3f4f14f5af1c",
        title: "What directors gain",
    },
];

pub fn services() -> &'static [Service] {
    const MUSIC_VIDEOS: &[VideoRef] = &[
        VideoRef { id: "962e55c1fed1ffdf774a0d48dfdc57b4", title: "Music video 1" },
        VideoRef { id: "08c7513d18f12de1bede54801e2354ff", title: "Music video 2" },
        VideoRef { id: "daa750f156f7db418201bc58e68da76d", title: "Music video 3" },
        VideoRef { id: "6a976d31b9b04e19a71ad948a226efdd", title: "Music video 4" },
        VideoRef { id: "29eed5dfd3ba9d54d44a4d14d41f5890", title: "Music video 5" },
    ];
    const COMMERCIALS: &[VideoRef] = &[
        VideoRef { id: "19e2bbb3658059a43469c67ec142b745", title: "Commercial 1" },
        VideoRef { id: "8776b17768745b2e3d480bd14eb6a671", title: "Commercial 2" },
        VideoRef { id: "f2a628f4429d0f86dae894af7714b688", title: "Commercial 3" },
        VideoRef { id: "d95a8389f3efbb052925c8edc73e41b2", title: "Commercial 4" },
        VideoRef { id: "b51229cdb3d337bf08e009f0a48bfb47", title: "Commercial 5" },
    ];
    const BRAND_FILMS: &[VideoRef] = &[
        VideoRef { id: "", title: "Brand film 1" },
        VideoRef { id: "", title: "Brand film 2" },
        VideoRef { id: "", title: "Brand film 3" },
        VideoRef { id: "", title: "Brand film 4" },
        VideoRef { id: "", title: "Brand film 5" },
    ];
    const LIVE_EVENTS: &[VideoRef] = &[
        VideoRef { id: "", title: "Live event 1" },
        VideoRef { id: "", title: "Live event 2" },
        VideoRef { id: "", title: "Live event 3" },
        VideoRef { id: "", title: "Live event 4" },
    ];
    const SOCIAL: &[VideoRef] = &[
        VideoRef { id: "", title: "Social cut 1" },
        VideoRef { id: "", title: "Social cut 2" },
        VideoRef { id: "", title: "Social cut 3" },
        VideoRef { id: "", title: "Social cut 4" },
    ];
    const DOCUMENTARY: &[VideoRef] = &[
        VideoRef { id: "", title: "Documentary 1" },
        VideoRef { id: "", title: "Documentary 2" },
        VideoRef { id: "", title: "Documentary 3" },
        VideoRef { id: "", title: "Documentary 4" },
    ];

    &[
        Service {
            title: "Music Videos",
            desc: "Visual worlds that unfold the philosophy of a track.",
            quote: "I love music, so shooting videos for it is pure drive.",
            author: "A. Voronov",
            videos: MUSIC_VIDEOS,
        },
        Service {
            title: "Commercials",
            desc: "Stories that sell, shot with a cinema eye.",
            quote: "Attention is the scarcest resource there is. We shoot what holds it.",
            author: "Firebird Films",
            videos: COMMERCIALS,
        },
        Service {
            title: "Brand Films",
            desc: "Large-scale video portraits of companies.",
            quote: "We translate your values, mission and standing into film language.",
            author: "Firebird Films",
            videos: BRAND_FILMS,
        },
        Service {
            title: "Multi-Camera Live",
            desc: "The energy and scale of your events. Up to 8 cameras, live broadcast.",
            quote: "A live broadcast leaves no room for error, and that is exactly how we treat it.",
            author: "Firebird Films",
            videos: LIVE_EVENTS,
        },
        Service {
            title: "Social Media",
            desc: "Fast-moving formats without giving up production quality.",
            quote: "Big production, adapted for the phone screen.",
            author: "Firebird Films",
            videos: SOCIAL,
        },
        Service {
            title: "Documentary",
            desc: "Deep stories and real meaning.",
            quote: "Stories that move the audience and stay.",
            author: "Firebird Films",
            videos: DOCUMENTARY,
        },
    ]
}

pub fn team() -> &'static [TeamMember] {
    &[
        TeamMember {
            id: 1,
            name: "Andrei Voronov",
            role: "Founder, Director of Photography",
            photo: "/assets/team-andrei.webp",
            bio: "Founder of Firebird Films. Board member of the national cinematographers guild, \
                  lecturer at two film schools. Studied under Hollywood masters and shot more than \
                  fifty narrative projects, from prime-time drama to feature film.",
            interview_url: Some("https://rutube.ru/video/9557a8d928fd480964af0159a60efa11/"),
        },
        TeamMember {
            id: 2,
            name: "Alexei Smirnov",
            role: "Technical Director",
            photo: "/assets/team-alexei.webp",
            bio: "The engineering mind behind our custom rigs and the integration of virtual \
                  production into live sets.",
            interview_url: None,
        },
        TeamMember {
            id: 3,
            name: "Maria Volkova",
            role: "Executive Producer",
            photo: "/assets/team-maria.webp",
            bio: "Makes the impossible fit inside the budget and the deadline.",
            interview_url: None,
        },
        TeamMember {
            id: 4,
            name: "Dmitry Kozlov",
            role: "Editor",
            photo: "/assets/team-dmitry.webp",
            bio: "Sees rhythm and drama where others see a pile of takes.",
            interview_url: None,
        },
    ]
}

pub fn testimonials() -> &'static [Testimonial] {
    &[
        Testimonial {
            text: "Working with Firebird Films means being certain of the result. A professional \
                   approach, a clear grasp of the task and flawless image quality.",
            name: "Alexander Petrov",
            role: "Executive Producer",
            company: "Non-Stop Production",
        },
        Testimonial {
            text: "The Firebird crew saved our project when the schedule was on fire. Their \
                   camera-car stabilization exceeded every expectation.",
            name: "Maria Sidorova",
            role: "Creative Director",
            company: "BBDO",
        },
        Testimonial {
            text: "We shot a music video together and the result went beyond anything we hoped \
                   for. The DoP personally checked every frame.",
            name: "Dmitry Nagiev",
            role: "Director",
            company: "Art Pictures",
        },
        Testimonial {
            text: "Third year running our ad campaigns with Firebird. Western-studio image \
                   quality, and they always find a solution inside the budget.",
            name: "Elena Kozlova",
            role: "Marketing Director",
            company: "Sberbank",
        },
        Testimonial {
            text: "We ordered a corporate film for our anniversary and got real cinema: \
                   multi-camera coverage, drones, proper lighting, all of it top level.",
            name: "Igor Volkov",
            role: "CEO",
            company: "Rostec Group",
        },
    ]
}

/// Partner logo asset indices for the marquee strip.
pub fn partner_logos() -> Vec<String> {
    (1..=9).map(|n| format!("/assets/partners/{}l.webp", n)).collect()
}
