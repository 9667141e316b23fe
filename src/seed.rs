//! Reference catalog: the cities, properties and reviews the original
//! deployment ships with. Used to pre-load the degraded store and by the
//! `seed-db` binary to populate the durable store.

use chrono::{TimeZone, Utc};

use crate::types::{
    City, GenderPreference, Property, PropertyDraft, PropertyType, Review, ReviewStatus, RoomType,
};

const MODERN_SINGLE_ROOM_IMAGE: &str =
    "https://images.unsplash.com/photo-1555854877-bab0e564b8d5?w=800&q=80";
const HOSTEL_ROOM_IMAGE: &str =
    "https://images.unsplash.com/photo-1522771739844-6a9f6d5f14af?w=800&q=80";
const APARTMENT_IMAGE: &str =
    "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?w=800&q=80";
const GIRLS_HOSTEL_IMAGE: &str =
    "https://images.unsplash.com/photo-1616486338812-3dadae4b4ace?w=800&q=80";
const BOYS_PG_IMAGE: &str =
    "https://images.unsplash.com/photo-1631049307264-da0ec9d70304?w=800&q=80";

pub fn cities() -> Vec<City> {
    vec![
        City::new(
            "Mumbai",
            "https://images.unsplash.com/photo-1570168007204-dfb528c6958f?w=800&q=80",
            45,
        ),
        City::new(
            "Delhi",
            "https://images.unsplash.com/photo-1587474260584-136574528ed5?w=800&q=80",
            52,
        ),
        City::new(
            "Bangalore",
            "https://images.unsplash.com/photo-1596176530529-78163a4f7af2?w=800&q=80",
            68,
        ),
        City::new(
            "Pune",
            "https://images.unsplash.com/photo-1595658658481-d53d3f999875?w=800&q=80",
            38,
        ),
        City::new(
            "Hyderabad",
            "https://images.unsplash.com/photo-1696941515998-d83f24967aca?q=80&w=736&auto=format&fit=crop",
            42,
        ),
        City::new(
            "Chennai",
            "https://images.unsplash.com/photo-1582510003544-4d00b7f74220?w=800&q=80",
            35,
        ),
        City::new(
            "Kolkata",
            "https://images.unsplash.com/photo-1558431382-27e303142255?w=800&q=80",
            28,
        ),
        City::new(
            "Ahmedabad",
            "https://images.unsplash.com/photo-1609137144813-7d9921338f24?w=800&q=80",
            24,
        ),
    ]
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

pub fn properties() -> Vec<Property> {
    let drafts = vec![
        PropertyDraft {
            title: "Modern Single Room PG near IIT Mumbai".to_owned(),
            description: "Spacious single room with attached bathroom in a well-maintained PG. \
                Located just 2km from IIT Mumbai campus. Includes WiFi, meals, and laundry \
                services. Safe and secure environment with 24/7 security and CCTV surveillance."
                .to_owned(),
            property_type: PropertyType::Pg,
            city: "Mumbai".to_owned(),
            area: "Powai".to_owned(),
            price: 15000,
            images: strings(&[MODERN_SINGLE_ROOM_IMAGE, HOSTEL_ROOM_IMAGE, APARTMENT_IMAGE]),
            amenities: strings(&["WiFi", "Meals", "Laundry", "Security", "AC"]),
            room_type: RoomType::Single,
            gender_preference: GenderPreference::Any,
            verified: true,
            rating: 4.8,
            total_reviews: 24,
            distance_from_college: 2,
            available_rooms: 3,
            created_by: None,
        },
        PropertyDraft {
            title: "Girls Hostel - Delhi University Area".to_owned(),
            description: "Safe and comfortable girls-only hostel near Delhi University. Features \
                include study room, common area, and nutritious meals. Strict security with \
                biometric access and women security guards available 24/7."
                .to_owned(),
            property_type: PropertyType::Hostel,
            city: "Delhi".to_owned(),
            area: "North Campus".to_owned(),
            price: 12000,
            images: strings(&[GIRLS_HOSTEL_IMAGE, MODERN_SINGLE_ROOM_IMAGE, HOSTEL_ROOM_IMAGE]),
            amenities: strings(&["WiFi", "Meals", "Security", "Laundry", "Study Room"]),
            room_type: RoomType::Double,
            gender_preference: GenderPreference::Female,
            verified: true,
            rating: 4.9,
            total_reviews: 42,
            distance_from_college: 1,
            available_rooms: 5,
            created_by: None,
        },
        PropertyDraft {
            title: "Premium 2BHK Flat for Students - Bangalore".to_owned(),
            description: "Fully furnished 2BHK apartment perfect for 3-4 students. Modern \
                amenities, high-speed internet, and close to major tech parks. Ideal for working \
                professionals and students. Includes parking space and 24/7 water supply."
                .to_owned(),
            property_type: PropertyType::Flat,
            city: "Bangalore".to_owned(),
            area: "Koramangala".to_owned(),
            price: 35000,
            images: strings(&[APARTMENT_IMAGE, MODERN_SINGLE_ROOM_IMAGE, HOSTEL_ROOM_IMAGE]),
            amenities: strings(&["WiFi", "Parking", "Security", "AC", "Gym"]),
            room_type: RoomType::Shared,
            gender_preference: GenderPreference::Any,
            verified: true,
            rating: 4.7,
            total_reviews: 18,
            distance_from_college: 5,
            available_rooms: 1,
            created_by: None,
        },
        PropertyDraft {
            title: "Budget Boys PG near Pune University".to_owned(),
            description: "Affordable PG accommodation for boys near Pune University. Clean rooms, \
                home-cooked meals, and friendly environment. Perfect for students on a budget. \
                Includes basic amenities and common study area."
                .to_owned(),
            property_type: PropertyType::Pg,
            city: "Pune".to_owned(),
            area: "Shivajinagar".to_owned(),
            price: 8000,
            images: strings(&[BOYS_PG_IMAGE, MODERN_SINGLE_ROOM_IMAGE, HOSTEL_ROOM_IMAGE]),
            amenities: strings(&["WiFi", "Meals", "Laundry", "Security"]),
            room_type: RoomType::Triple,
            gender_preference: GenderPreference::Male,
            verified: true,
            rating: 4.5,
            total_reviews: 31,
            distance_from_college: 3,
            available_rooms: 4,
            created_by: None,
        },
        PropertyDraft {
            title: "AC Hostel Rooms - Hyderabad BITS Campus".to_owned(),
            description: "Air-conditioned hostel rooms with modern facilities near BITS Pilani \
                Hyderabad campus. Includes high-speed WiFi, study area, recreation room, and \
                healthy meals. Well-connected to the city center."
                .to_owned(),
            property_type: PropertyType::Hostel,
            city: "Hyderabad".to_owned(),
            area: "Shamirpet".to_owned(),
            price: 14000,
            images: strings(&[HOSTEL_ROOM_IMAGE, MODERN_SINGLE_ROOM_IMAGE, GIRLS_HOSTEL_IMAGE]),
            amenities: strings(&["WiFi", "AC", "Meals", "Security", "Study Room", "Recreation"]),
            room_type: RoomType::Double,
            gender_preference: GenderPreference::Any,
            verified: true,
            rating: 4.6,
            total_reviews: 27,
            distance_from_college: 2,
            available_rooms: 6,
            created_by: None,
        },
        PropertyDraft {
            title: "Luxury PG for Working Professionals - Bangalore".to_owned(),
            description: "Premium PG accommodation in the heart of Bangalore. Perfect for \
                students and young professionals. Features include gym, swimming pool, and \
                rooftop lounge. Fully furnished rooms with modern amenities."
                .to_owned(),
            property_type: PropertyType::Pg,
            city: "Bangalore".to_owned(),
            area: "Indiranagar".to_owned(),
            price: 22000,
            images: strings(&[MODERN_SINGLE_ROOM_IMAGE, APARTMENT_IMAGE, HOSTEL_ROOM_IMAGE]),
            amenities: strings(&["WiFi", "AC", "Gym", "Parking", "Security", "Meals"]),
            room_type: RoomType::Single,
            gender_preference: GenderPreference::Any,
            verified: true,
            rating: 4.9,
            total_reviews: 35,
            distance_from_college: 4,
            available_rooms: 2,
            created_by: None,
        },
        PropertyDraft {
            title: "Women's PG near Mumbai University".to_owned(),
            description: "Safe and secure women-only PG near Mumbai University. Homely \
                environment with nutritious meals and all basic amenities. Located in a peaceful \
                residential area with easy access to public transport."
                .to_owned(),
            property_type: PropertyType::Pg,
            city: "Mumbai".to_owned(),
            area: "Kalina".to_owned(),
            price: 13000,
            images: strings(&[GIRLS_HOSTEL_IMAGE, MODERN_SINGLE_ROOM_IMAGE, HOSTEL_ROOM_IMAGE]),
            amenities: strings(&["WiFi", "Meals", "Laundry", "Security", "AC"]),
            room_type: RoomType::Double,
            gender_preference: GenderPreference::Female,
            verified: true,
            rating: 4.8,
            total_reviews: 29,
            distance_from_college: 1,
            available_rooms: 3,
            created_by: None,
        },
        PropertyDraft {
            title: "Student Flat Sharing - Delhi South Campus".to_owned(),
            description: "Spacious 3BHK flat available for student sharing near Delhi South \
                Campus. Fully furnished with modern kitchen, washing machine, and high-speed \
                internet. Perfect for groups of friends."
                .to_owned(),
            property_type: PropertyType::Flat,
            city: "Delhi".to_owned(),
            area: "Saket".to_owned(),
            price: 28000,
            images: strings(&[APARTMENT_IMAGE, MODERN_SINGLE_ROOM_IMAGE, HOSTEL_ROOM_IMAGE]),
            amenities: strings(&["WiFi", "Parking", "Security", "AC"]),
            room_type: RoomType::Shared,
            gender_preference: GenderPreference::Any,
            verified: true,
            rating: 4.6,
            total_reviews: 15,
            distance_from_college: 3,
            available_rooms: 1,
            created_by: None,
        },
        PropertyDraft {
            title: "Affordable Hostel - Chennai Anna University".to_owned(),
            description: "Budget-friendly hostel near Anna University with all essential \
                amenities. Clean and well-maintained rooms with study facilities. Regular \
                housekeeping and laundry services included."
                .to_owned(),
            property_type: PropertyType::Hostel,
            city: "Chennai".to_owned(),
            area: "Guindy".to_owned(),
            price: 9500,
            images: strings(&[HOSTEL_ROOM_IMAGE, BOYS_PG_IMAGE, MODERN_SINGLE_ROOM_IMAGE]),
            amenities: strings(&["WiFi", "Meals", "Laundry", "Security", "Study Room"]),
            room_type: RoomType::Triple,
            gender_preference: GenderPreference::Any,
            verified: true,
            rating: 4.4,
            total_reviews: 22,
            distance_from_college: 2,
            available_rooms: 8,
            created_by: None,
        },
        PropertyDraft {
            title: "Premium Girls Hostel - Pune IT Park".to_owned(),
            description: "Upscale girls hostel near Hinjewadi IT Park. Features include gym, \
                library, rooftop terrace, and cafe. Professional atmosphere perfect for students \
                and working women. Top-notch security and facilities."
                .to_owned(),
            property_type: PropertyType::Hostel,
            city: "Pune".to_owned(),
            area: "Hinjewadi".to_owned(),
            price: 18000,
            images: strings(&[GIRLS_HOSTEL_IMAGE, MODERN_SINGLE_ROOM_IMAGE, APARTMENT_IMAGE]),
            amenities: strings(&[
                "WiFi", "AC", "Gym", "Meals", "Security", "Study Room", "Recreation",
            ]),
            room_type: RoomType::Single,
            gender_preference: GenderPreference::Female,
            verified: true,
            rating: 4.9,
            total_reviews: 38,
            distance_from_college: 5,
            available_rooms: 4,
            created_by: None,
        },
    ];

    drafts.into_iter().map(Property::new).collect()
}

/// Seed reviews reference properties by index into [`properties`] output;
/// they ship approved so the public listing is not empty out of the box.
pub fn reviews(properties: &[Property]) -> Vec<Review> {
    let entries: [(usize, &str, &str, i32, &str, (i32, u32, u32)); 4] = [
        (
            0,
            "Rahul Verma",
            "IIT Mumbai",
            5,
            "Excellent PG with great facilities. The owner is very cooperative and the food is \
             amazing. Highly recommended for IIT students!",
            (2024, 1, 15),
        ),
        (
            0,
            "Sneha Patel",
            "IIT Mumbai",
            5,
            "Very close to campus and the room is spacious. WiFi speed is great for online \
             classes. Worth every penny!",
            (2024, 2, 20),
        ),
        (
            1,
            "Priya Sharma",
            "Delhi University",
            5,
            "Safe and secure environment. The warden is very caring and the food is homely. \
             Perfect for girls studying in DU!",
            (2024, 1, 10),
        ),
        (
            1,
            "Anjali Reddy",
            "Delhi University",
            5,
            "Great hostel with excellent amenities. Study room is very helpful during exams. \
             Highly recommend!",
            (2024, 3, 5),
        ),
    ];

    entries
        .into_iter()
        .filter_map(|(index, student_name, university, rating, comment, (y, m, d))| {
            let property = properties.get(index)?;
            Some(Review {
                id: uuid::Uuid::new_v4().to_string(),
                property_id: property.id.clone(),
                student_name: student_name.to_owned(),
                university: university.to_owned(),
                rating,
                comment: comment.to_owned(),
                date: Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single().unwrap_or_else(Utc::now),
                status: ReviewStatus::Approved,
            })
        })
        .collect()
}
