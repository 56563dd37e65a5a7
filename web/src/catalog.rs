//! The property catalog. Reference data for this flow is supplied in
//! memory; there is no remote fetch behind it.

use shared_types::{Host, Property};

pub fn properties() -> Vec<Property> {
    vec![
        Property {
            id: 1,
            title: "Luxury Beach Villa".to_string(),
            location: "Malibu, California".to_string(),
            price: 450,
            rating: 4.9,
            image: "https://images.unsplash.com/photo-1613490493576-7fde63acd811?auto=format&fit=crop&q=80&w=1000".to_string(),
            description: "Experience luxury living in this stunning beachfront villa. Wake up to panoramic ocean views and fall asleep to the sound of waves. This modern villa features 4 bedrooms, a private pool, and direct beach access.".to_string(),
            amenities: amenities(&[
                "Pool",
                "Beach Access",
                "WiFi",
                "Kitchen",
                "4 Bedrooms",
                "3 Bathrooms",
                "Ocean View",
                "Air Conditioning",
            ]),
            host: Host {
                name: "Sarah Johnson".to_string(),
                rating: 4.95,
                response_time: "within an hour".to_string(),
                image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&q=80&w=200".to_string(),
            },
        },
        Property {
            id: 2,
            title: "Mountain Retreat Cabin".to_string(),
            location: "Aspen, Colorado".to_string(),
            price: 275,
            rating: 4.8,
            image: "https://images.unsplash.com/photo-1518780664697-55e3ad937233?auto=format&fit=crop&q=80&w=1000".to_string(),
            description: "Escape to this cozy mountain cabin surrounded by nature. Perfect for skiing in winter and hiking in summer. Features a rustic interior with modern amenities and a hot tub overlooking the mountains.".to_string(),
            amenities: amenities(&[
                "Hot Tub",
                "Fireplace",
                "WiFi",
                "Kitchen",
                "2 Bedrooms",
                "2 Bathrooms",
                "Mountain View",
                "Heating",
            ]),
            host: Host {
                name: "Mike Anderson".to_string(),
                rating: 4.88,
                response_time: "within a day".to_string(),
                image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?auto=format&fit=crop&q=80&w=200".to_string(),
            },
        },
        Property {
            id: 3,
            title: "Modern City Loft".to_string(),
            location: "New York City, NY".to_string(),
            price: 320,
            rating: 4.7,
            image: "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688?auto=format&fit=crop&q=80&w=1000".to_string(),
            description: "Stay in the heart of Manhattan in this stylish loft apartment. High ceilings, exposed brick, and contemporary furnishings create the perfect urban retreat. Walking distance to major attractions.".to_string(),
            amenities: amenities(&[
                "City View",
                "WiFi",
                "Kitchen",
                "1 Bedroom",
                "1 Bathroom",
                "Air Conditioning",
                "Gym Access",
                "Doorman",
            ]),
            host: Host {
                name: "Emily Chen".to_string(),
                rating: 4.92,
                response_time: "within hours".to_string(),
                image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&q=80&w=200".to_string(),
            },
        },
    ]
}

pub fn find(id: i32) -> Option<Property> {
    properties().into_iter().find(|property| property.id == id)
}

fn amenities(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lookup_by_id() {
        assert_eq!(find(1).map(|p| p.title), Some("Luxury Beach Villa".to_string()));
        assert_eq!(find(2).map(|p| p.price), Some(275));
        assert!(find(99).is_none());
    }
}
