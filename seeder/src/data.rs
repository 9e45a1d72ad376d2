//! The sample catalog: three salons around lower Manhattan/Brooklyn with
//! services spread across the category set, so every search filter has
//! something to bite on.

pub struct ServiceSeed {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub duration_minutes: i64,
    pub price: f64,
}

pub struct StylistSeed {
    pub email: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub bio: &'static str,
    pub experience_years: i64,
    pub specialties: &'static [&'static str],
}

pub struct ReviewSeed {
    pub rating: i64,
    pub comment: Option<&'static str>,
}

pub struct SalonSeed {
    pub name: &'static str,
    pub description: &'static str,
    pub address: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub zip_code: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub phone: &'static str,
    pub email: &'static str,
    pub images: &'static [&'static str],
    pub owner_email: &'static str,
    pub owner_first_name: &'static str,
    pub owner_last_name: &'static str,
    pub services: &'static [ServiceSeed],
    pub stylists: &'static [StylistSeed],
    pub reviews: &'static [ReviewSeed],
}

pub const CUSTOMER_EMAIL: &str = "customer@example.com";
pub const SEED_PASSWORD: &str = "password123";

pub const SALONS: &[SalonSeed] = &[
    SalonSeed {
        name: "Elite Hair Studio",
        description: "Professional hair studio offering premium cuts, coloring, and styling services.",
        address: "123 Main Street",
        city: "Downtown",
        state: "New York",
        zip_code: "10001",
        latitude: 40.7589,
        longitude: -73.9851,
        phone: "+1 (555) 123-0000",
        email: "info@elitehairstudio.com",
        images: &[
            "https://images.unsplash.com/photo-1560066984-138dadb4c035?w=800",
            "https://images.unsplash.com/photo-1562322140-8baeececf3df?w=800",
        ],
        owner_email: "owner@example.com",
        owner_first_name: "David",
        owner_last_name: "Johnson",
        services: &[
            ServiceSeed {
                name: "Women's Haircut",
                description: "Professional haircut and styling",
                category: "HAIRCUT",
                duration_minutes: 45,
                price: 65.0,
            },
            ServiceSeed {
                name: "Men's Haircut",
                description: "Classic and modern cuts for men",
                category: "HAIRCUT",
                duration_minutes: 30,
                price: 35.0,
            },
            ServiceSeed {
                name: "Hair Coloring",
                description: "Full hair color service",
                category: "COLORING",
                duration_minutes: 120,
                price: 120.0,
            },
            ServiceSeed {
                name: "Highlights",
                description: "Professional highlighting service",
                category: "COLORING",
                duration_minutes: 150,
                price: 150.0,
            },
            ServiceSeed {
                name: "Blowout",
                description: "Professional blow dry and styling",
                category: "STYLING",
                duration_minutes: 30,
                price: 45.0,
            },
        ],
        stylists: &[
            StylistSeed {
                email: "sarah@example.com",
                first_name: "Sarah",
                last_name: "Johnson",
                bio: "Senior stylist with 8+ years of experience in modern cuts and color.",
                experience_years: 8,
                specialties: &["Hair Cutting", "Color Correction", "Styling"],
            },
            StylistSeed {
                email: "mike@example.com",
                first_name: "Mike",
                last_name: "Chen",
                bio: "Color specialist passionate about creative transformations.",
                experience_years: 5,
                specialties: &["Hair Coloring", "Highlights", "Balayage"],
            },
        ],
        reviews: &[
            ReviewSeed {
                rating: 5,
                comment: Some("Fantastic experience! Highly recommend."),
            },
            ReviewSeed {
                rating: 4,
                comment: Some("Great cut, slightly long wait."),
            },
        ],
    },
    SalonSeed {
        name: "Urban Barber",
        description: "Modern barbershop specializing in fades, beard trims, and classic cuts.",
        address: "456 Market Ave",
        city: "Uptown",
        state: "New York",
        zip_code: "10027",
        latitude: 40.8116,
        longitude: -73.9465,
        phone: "+1 (555) 987-6543",
        email: "hello@urbanbarber.com",
        images: &["https://images.unsplash.com/photo-1556228724-4a3aa6458a27?w=800"],
        owner_email: "owner2@example.com",
        owner_first_name: "Amanda",
        owner_last_name: "Clark",
        services: &[
            ServiceSeed {
                name: "Fade Cut",
                description: "Precision fade with lineup",
                category: "HAIRCUT",
                duration_minutes: 45,
                price: 40.0,
            },
            ServiceSeed {
                name: "Beard Trim",
                description: "Shape and condition",
                category: "OTHER",
                duration_minutes: 30,
                price: 20.0,
            },
            ServiceSeed {
                name: "Hot Towel Shave",
                description: "Traditional straight-razor shave",
                category: "OTHER",
                duration_minutes: 40,
                price: 35.0,
            },
        ],
        stylists: &[StylistSeed {
            email: "jake@example.com",
            first_name: "Jake",
            last_name: "Williams",
            bio: "Barber focused on sharp fades and classic shaves.",
            experience_years: 6,
            specialties: &["Fades", "Beard Sculpting"],
        }],
        reviews: &[
            ReviewSeed {
                rating: 5,
                comment: Some("Best fade in the city."),
            },
            ReviewSeed {
                rating: 4,
                comment: None,
            },
        ],
    },
    SalonSeed {
        name: "Serenity Spa & Nails",
        description: "Calming spa for nails, skincare, and massage therapy.",
        address: "789 Willow Lane",
        city: "Brooklyn",
        state: "New York",
        zip_code: "11215",
        latitude: 40.6782,
        longitude: -73.9442,
        phone: "+1 (555) 222-3333",
        email: "relax@serenityspa.com",
        images: &["https://images.unsplash.com/photo-1540555700478-4be289fbecef?w=800"],
        owner_email: "owner3@example.com",
        owner_first_name: "Priya",
        owner_last_name: "Patel",
        services: &[
            ServiceSeed {
                name: "Classic Manicure",
                description: "Shape, buff, and polish",
                category: "NAILS",
                duration_minutes: 30,
                price: 30.0,
            },
            ServiceSeed {
                name: "Signature Facial",
                description: "Deep-cleansing facial with massage",
                category: "SKINCARE",
                duration_minutes: 60,
                price: 80.0,
            },
            ServiceSeed {
                name: "Swedish Massage",
                description: "Full-body relaxation massage",
                category: "MASSAGE",
                duration_minutes: 60,
                price: 95.0,
            },
        ],
        stylists: &[StylistSeed {
            email: "emily@example.com",
            first_name: "Emily",
            last_name: "Stone",
            bio: "Licensed esthetician and nail artist.",
            experience_years: 7,
            specialties: &["Gel Nails", "Facials"],
        }],
        reviews: &[
            ReviewSeed {
                rating: 5,
                comment: Some("So relaxing, lovely staff."),
            },
            ReviewSeed {
                rating: 4,
                comment: Some("Great facial."),
            },
            ReviewSeed {
                rating: 4,
                comment: None,
            },
        ],
    },
];
