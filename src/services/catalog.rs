use crate::models::{Catalog, DetailingPackage, InteriorService, WashPackage, BOOKING_DATES};

pub static TIME_SLOTS: [&str; 8] = [
    "9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM",
];

pub static WASH_PACKAGES: [WashPackage; 3] = [
    WashPackage {
        id: "basic",
        name: "Basic Wash",
        price: "₹299",
        duration: "30 min",
        features: &["Exterior wash", "Tire shine", "Window cleaning"],
    },
    WashPackage {
        id: "premium",
        name: "Premium Wash",
        price: "₹599",
        duration: "45 min",
        features: &[
            "Exterior wash",
            "Interior vacuum",
            "Tire shine",
            "Window cleaning",
            "Dashboard polish",
        ],
    },
    WashPackage {
        id: "deluxe",
        name: "Deluxe Wash",
        price: "₹999",
        duration: "60 min",
        features: &[
            "Everything in Premium",
            "Wax treatment",
            "Interior detailing",
            "Leather conditioning",
            "Air freshener",
        ],
    },
];

pub static DETAILING_PACKAGES: [DetailingPackage; 3] = [
    DetailingPackage {
        id: "standard",
        name: "Standard Detailing",
        price: "₹799",
        duration: "90 min",
        icon: "sparkles",
        features: &[
            "Hand wash & dry",
            "Wheel & tire cleaning",
            "Clay bar treatment",
            "Wax application",
            "Window cleaning",
        ],
        popular: false,
    },
    DetailingPackage {
        id: "premium",
        name: "Premium Detailing",
        price: "₹1,499",
        duration: "120 min",
        icon: "diamond",
        features: &[
            "Everything in Standard",
            "Paint correction",
            "Ceramic coating",
            "Headlight restoration",
            "Trim restoration",
            "Interior vacuum",
        ],
        popular: true,
    },
    DetailingPackage {
        id: "ultimate",
        name: "Ultimate Detailing",
        price: "₹2,499",
        duration: "180 min",
        icon: "star",
        features: &[
            "Everything in Premium",
            "Full paint correction",
            "Premium ceramic coating",
            "Engine bay cleaning",
            "Undercarriage wash",
            "Interior deep clean",
            "Leather conditioning",
        ],
        popular: false,
    },
];

pub static INTERIOR_SERVICES: [InteriorService; 6] = [
    InteriorService {
        id: "vacuum",
        name: "Deep Vacuum",
        icon: "snow",
        price: "₹249",
        description: "Complete interior vacuuming",
    },
    InteriorService {
        id: "seats",
        name: "Seat Cleaning",
        icon: "car-sport",
        price: "₹399",
        description: "Fabric/leather seat deep clean",
    },
    InteriorService {
        id: "dashboard",
        name: "Dashboard Polish",
        icon: "sparkles",
        price: "₹199",
        description: "Dashboard & console cleaning",
    },
    InteriorService {
        id: "carpet",
        name: "Carpet Shampoo",
        icon: "water",
        price: "₹449",
        description: "Deep carpet cleaning",
    },
    InteriorService {
        id: "vents",
        name: "Vent Cleaning",
        icon: "airplane",
        price: "₹149",
        description: "AC vent deep cleaning",
    },
    InteriorService {
        id: "windows",
        name: "Window Cleaning",
        icon: "sunny",
        price: "₹179",
        description: "Interior window polish",
    },
];

pub fn catalog() -> Catalog {
    Catalog {
        dates: &BOOKING_DATES,
        time_slots: &TIME_SLOTS,
        car_wash: &WASH_PACKAGES,
        exterior_detailing: &DETAILING_PACKAGES,
        interior_cleaning: &INTERIOR_SERVICES,
    }
}

pub fn find_wash_package(id: &str) -> Option<&'static WashPackage> {
    WASH_PACKAGES.iter().find(|p| p.id == id)
}

pub fn find_detailing_package(id: &str) -> Option<&'static DetailingPackage> {
    DETAILING_PACKAGES.iter().find(|p| p.id == id)
}

pub fn find_interior_service(id: &str) -> Option<&'static InteriorService> {
    INTERIOR_SERVICES.iter().find(|s| s.id == id)
}
