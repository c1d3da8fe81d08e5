//! Static copy for the informational pages, footer and contact blocks

pub const BUSINESS_NAME: &str = "DJN Services LLC";
pub const TAGLINE: &str = "Professional welding services for all your metal fabrication needs.";
pub const PHONE: &str = "(555) 123-4567";
pub const EMAIL: &str = "info@djnservicesllc.com";
pub const FOOTER_HOURS: &str = "Mon-Fri, 8AM-6PM";

/// Headline block at the top of a page
#[derive(Debug, Clone, Copy)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Titled block of text
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

/// Bulleted list under a heading
#[derive(Debug, Clone, Copy)]
pub struct BulletList {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

/// One offering on the Services page
#[derive(Debug, Clone, Copy)]
pub struct ServiceGroup {
    pub title: &'static str,
    pub description: &'static str,
    pub lists: &'static [BulletList],
    pub materials: &'static [Card],
}

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

// Home

pub const HOME_HERO: Hero = Hero {
    title: "Expert Welding Services You Can Trust",
    subtitle: "Professional welding and metal fabrication for commercial, industrial, and residential projects.",
};

pub const HOME_SERVICES_INTRO: &str =
    "We offer a comprehensive range of welding and fabrication services";

pub const HOME_SERVICES: &[Card] = &[
    Card {
        title: "MIG Welding",
        lines: &["Precision MIG welding for clean, strong joints on various metals."],
    },
    Card {
        title: "TIG Welding",
        lines: &["High-quality TIG welding for detailed work and exotic metals."],
    },
    Card {
        title: "Fabrication",
        lines: &["Custom metal fabrication tailored to your specific needs."],
    },
    Card {
        title: "Repair Services",
        lines: &["Expert repair services for damaged metal structures and equipment."],
    },
];

pub const WHY_CHOOSE_US: Card = Card {
    title: "Why Choose DJN Services LLC?",
    lines: &["With over two decades of combined experience, we've built our reputation on quality workmanship, reliability, and customer satisfaction. We take pride in every project, no matter the size."],
};

pub const HOME_FEATURES: &[&str] = &[
    "Certified & Licensed Welders",
    "20+ Years Combined Experience",
    "Competitive Pricing",
    "Quick Turnaround Time",
    "Mobile Welding Available",
    "Quality Guaranteed",
];

pub const HOME_CTA: Hero = Hero {
    title: "Ready to Get Started?",
    subtitle: "Contact us today for a free quote or to schedule your welding service.",
};

// Services

pub const SERVICES_HERO: Hero = Hero {
    title: "Our Services",
    subtitle: "Welding, Hotshot, and Dump Services - Your one-stop resource for construction and service needs",
};

pub const SERVICE_GROUPS: &[ServiceGroup] = &[
    ServiceGroup {
        title: "Mobile Welding Services",
        description: "Mobile welding services offer on-site solutions for industries and individuals, focusing on flexibility and convenience. Mobile welding combines expertise and convenience, delivering high-quality results directly at client locations. Ideal for construction, repairs, and custom projects.",
        lists: &[
            BulletList {
                heading: "Welding Techniques",
                items: &[
                    "SMAW (Shielded Metal Arc Welding): Durable, versatile for repair and construction.",
                    "FCAW (Flux-Cored Arc Welding): High-speed and efficient, ideal for structural and heavy-duty tasks.",
                    "GMAW (Gas Metal Arc Welding): Precision welding for fabrication and manufacturing.",
                ],
            },
            BulletList {
                heading: "Additional Offerings",
                items: &[
                    "Cutting Services: Precise metal cutting for various applications.",
                    "Custom Fabrication: Tailored solutions to meet unique client specifications.",
                ],
            },
        ],
        materials: &[],
    },
    ServiceGroup {
        title: "Hotshot Services",
        description: "Hotshot services provide fast, on-demand transportation for time-sensitive deliveries, catering to industries needing quick and reliable logistics. With a commitment to flexibility and reliability, we provide exceptional solutions for critical transportation needs.",
        lists: &[
            BulletList {
                heading: "Core Offerings",
                items: &[
                    "Freight Delivery: Transporting goods like construction materials, equipment, and supplies.",
                    "Time-Sensitive Loads: Rapid response for urgent deliveries within tight deadlines.",
                    "Small to Medium Loads: Ideal for loads that don't require a full trailer, reducing costs.",
                ],
            },
            BulletList {
                heading: "Specialized Capabilities",
                items: &[
                    "40' Flatbed Services: Perfect for larger, irregularly shaped, or bulky items.",
                    "Regional or Long-Distance Coverage: Flexible delivery options tailored to customer needs.",
                    "Compliance: Fully insured, adhering to all transportation regulations.",
                ],
            },
        ],
        materials: &[],
    },
    ServiceGroup {
        title: "Handyman Services",
        description: "Our handyman services are designed to handle a wide range of projects, ensuring your property is functional, safe, and looking its best. From minor repairs to larger renovations, we offer expertise in various areas. No job is too big or small. With our commitment to quality and attention to detail, DJN Services LLC is your trusted partner for all your handyman needs.",
        lists: &[BulletList {
            heading: "Services",
            items: &[
                "General Repairs: Fixing doors, windows, cabinets, and more.",
                "Installation Services: Installing fixtures, appliances, and other essential upgrades.",
                "Painting and Finishing: Interior and exterior painting to refresh and enhance your spaces.",
                "Custom Projects: Tailored solutions for unique needs, ensuring quality craftsmanship.",
            ],
        }],
        materials: &[],
    },
    ServiceGroup {
        title: "Trash Removal/Dump Services",
        description: "Our dump services provide efficient, on-demand hauling and delivery of materials, offering reliable and timely solutions for various industries and needs. With a commitment to flexibility and reliability, we provide exceptional hauling and dump services for all your material delivery needs.",
        lists: &[
            BulletList {
                heading: "Core Offerings",
                items: &[
                    "Trash Delivery: Hauling and delivery of waste and unwanted materials to dump sites.",
                    "Dirt, Rock, and Sand Delivery: Transporting dirt, rocks, sand, and similar materials to your specified location for disposal.",
                    "Time-Sensitive Hauling: Quick and responsive service for urgent delivery or dump tasks.",
                    "Flexible Load Sizes: Suitable for both small and large deliveries, accommodating various material volumes.",
                ],
            },
            BulletList {
                heading: "Specialized Capabilities",
                items: &[
                    "Dump Services up to 10,000 lbs per Load: Capable of hauling larger loads with ease and efficiency.",
                    "Regional or Long-Distance Coverage: Flexible options for local and extended transport.",
                    "Compliance: Fully insured, adhering to all environmental and waste disposal regulations.",
                ],
            },
        ],
        materials: &[
            Card {
                title: "Rock",
                lines: &["Durable, natural material used for construction, landscaping, and drainage. Ideal for foundations, pathways, and decorative applications."],
            },
            Card {
                title: "Sand",
                lines: &["Versatile material used in construction, landscaping, and leveling. Ideal for concrete, paving, and filling applications."],
            },
            Card {
                title: "Dirt",
                lines: &["Essential material for landscaping, gardening, and leveling. Perfect for filling, grading, and creating healthy soil bases."],
            },
            Card {
                title: "Mulch",
                lines: &["Organic or synthetic material used for landscaping and gardening. Ideal for retaining moisture, regulating soil temperature, and enhancing curb appeal."],
            },
        ],
    },
];

pub const SERVICES_CTA: Hero = Hero {
    title: "Need Our Services?",
    subtitle: "Get in touch with us today to discuss your project requirements and receive a free quote.",
};

// About

pub const ABOUT_HERO: Hero = Hero {
    title: "About DJN Services LLC",
    subtitle: "Building trust through quality craftsmanship since day one",
};

pub const ABOUT_INTRO: &str = "100% disabled veteran-owned, DJN Services LLC is dedicated to delivering top-quality solutions with the precision, reliability, and work ethic you can trust. Serving as a one-stop resource for your construction and service needs, we take pride in offering:";

pub const ABOUT_OFFERINGS: &[&str] = &[
    "Mobile Welding Services: Professional on-site welding, cutting, and custom fabrication to meet your project demands.",
    "Hotshot Services: Reliable, on-demand freight transportation with flexible load capabilities, including 40' flatbed services.",
    "Trash Removal and Dump Services: Efficient hauling and disposal of dirt, rock, sand, and waste materials, with load capacities up to 10,000 lbs.",
    "Handyman Services: Skilled repairs, installations, and custom projects to keep your home or business in top shape.",
];

pub const ABOUT_CLOSING: &[&str] = &[
    "At DJN Services LLC, we are committed to providing exceptional service with a focus on integrity, attention to detail, and a mission-driven approach to meeting our clients' needs.",
    "Let us bring experience, dedication, and results to your next project. Contact us today to learn more or request a quote!",
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat {
        number: "20+",
        label: "Years Experience",
    },
    Stat {
        number: "500+",
        label: "Projects Completed",
    },
    Stat {
        number: "100%",
        label: "Quality Guaranteed",
    },
    Stat {
        number: "24/7",
        label: "Emergency Service",
    },
];

pub const ABOUT_VALUES: &[Card] = &[
    Card {
        title: "Quality First",
        lines: &["We never compromise on quality. Every weld is performed to the highest standards with thorough inspection."],
    },
    Card {
        title: "Customer Focused",
        lines: &["Your satisfaction is our priority. We work closely with clients to ensure their needs are met and exceeded."],
    },
    Card {
        title: "Reliable Service",
        lines: &["We respect your time and deadlines. Count on us for prompt, professional service every time."],
    },
    Card {
        title: "Precision Work",
        lines: &["Attention to detail is what sets us apart. We take pride in delivering accurate, precise results."],
    },
];

pub const CERTIFICATIONS: &[BulletList] = &[
    BulletList {
        heading: "Certifications",
        items: &[
            "AWS Certified Welders",
            "OSHA Safety Certified",
            "Structural Welding Certified",
            "Licensed & Insured",
        ],
    },
    BulletList {
        heading: "Specializations",
        items: &[
            "Stainless Steel Welding",
            "Aluminum Welding",
            "Cast Iron Repair",
            "Exotic Metal Welding",
        ],
    },
    BulletList {
        heading: "Equipment",
        items: &[
            "State-of-the-art Welders",
            "Mobile Welding Units",
            "Plasma Cutting Systems",
            "Fabrication Shop",
        ],
    },
];

pub const ABOUT_CTA: Hero = Hero {
    title: "Ready to Work With Us?",
    subtitle: "Experience the DJN Services LLC difference on your next project",
};

// Contact

pub const CONTACT_HERO: Hero = Hero {
    title: "Contact Us",
    subtitle: "Get in touch with us for a free quote or to discuss your welding project",
};

pub const CONTACT_INFO: &[Card] = &[
    Card {
        title: "Phone",
        lines: &[PHONE, "Available 24/7 for emergencies"],
    },
    Card {
        title: "Email",
        lines: &[EMAIL, "We respond within 24 hours"],
    },
    Card {
        title: "Location",
        lines: &["123 Industrial Parkway", "Your City, ST 12345"],
    },
    Card {
        title: "Business Hours",
        lines: &["Monday - Friday: 8AM - 6PM", "Saturday: 9AM - 2PM"],
    },
];

pub const EMERGENCY_SERVICE: Card = Card {
    title: "Emergency Service",
    lines: &["Need urgent welding repairs? We offer 24/7 emergency service for critical situations."],
};

pub const SERVICE_AREA: Card = Card {
    title: "Service Area",
    lines: &["We proudly serve the greater metropolitan area and surrounding counties. Mobile welding services available within 50 miles. Contact us to confirm we serve your location."],
};

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Do you offer free estimates?",
        answer: "Yes! We provide free, no-obligation quotes for all welding and fabrication projects.",
    },
    Faq {
        question: "What areas do you serve?",
        answer: "We serve the greater metropolitan area and offer mobile services within 50 miles of our location.",
    },
    Faq {
        question: "How quickly can you start?",
        answer: "Most projects can be scheduled within a few days. Emergency services are available 24/7.",
    },
    Faq {
        question: "Are you licensed and insured?",
        answer: "Yes, we are fully licensed, insured, and our welders are AWS certified.",
    },
];

// Booking

pub const BOOKING_HERO: Hero = Hero {
    title: "Book Your Service",
    subtitle: "Schedule your welding service online. We'll contact you within 24 hours to confirm your appointment.",
};

pub const BOOKING_NOTES: &[Card] = &[
    Card {
        title: "Quick Response",
        lines: &["We'll contact you within 24 hours to confirm your appointment."],
    },
    Card {
        title: "Free Estimates",
        lines: &["All bookings include a free, no-obligation quote."],
    },
    Card {
        title: "Flexible Scheduling",
        lines: &["We work around your schedule to minimize disruption."],
    },
];

pub const BOOKING_EMERGENCY: Hero = Hero {
    title: "Need Emergency Service?",
    subtitle: "For urgent welding repairs, call us directly at (555) 123-4567",
};
