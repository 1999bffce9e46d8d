use crate::models::Listing;

struct Sample {
    asin: &'static str,
    title: &'static str,
    price: &'static str,
    rating: &'static str,
    image_url: &'static str,
    reviews: &'static str,
    product_url: &'static str,
}

// Pet products regardless of the query that was asked for.
const SAMPLES: [Sample; 10] = [
    Sample {
        asin: "B0SQUEAKY1",
        title: "Squeaky Dog Toy Set",
        price: "$12.99",
        rating: "4.5",
        image_url: "https://via.placeholder.com/300x300/FFC107/FFFFFF?text=Dog+Toys",
        reviews: "6,318",
        product_url: "https://www.amazon.com/dp/B0SQUEAKY1",
    },
    Sample {
        asin: "B0SCRATCH2",
        title: "Cat Scratching Post",
        price: "$24.99",
        rating: "4.2",
        image_url: "",
        reviews: "2,904",
        product_url: "https://www.amazon.com/dp/B0SCRATCH2",
    },
    Sample {
        asin: "B07D4F5KMN",
        title: "Interactive Dog Toy - Puzzle Feeder for Mental Stimulation",
        price: "$24.99",
        rating: "4.7",
        image_url: "https://via.placeholder.com/300x300/FF6B6B/FFFFFF?text=Dog+Toy",
        reviews: "8,234",
        product_url: "https://www.amazon.com/dp/B07D4F5KMN",
    },
    Sample {
        asin: "B08N5WRWNW",
        title: "Premium Dog Food - Grain Free Recipe for Adult Dogs",
        price: "$54.99",
        rating: "4.5",
        image_url: "https://via.placeholder.com/300x300/4A90A4/FFFFFF?text=Dog+Food",
        reviews: "12,847",
        product_url: "https://www.amazon.com/dp/B08N5WRWNW",
    },
    Sample {
        asin: "B09XYZ1234",
        title: "Orthopedic Dog Bed - Memory Foam for Large Breeds",
        price: "$89.99",
        rating: "4.8",
        image_url: "https://via.placeholder.com/300x300/7CB342/FFFFFF?text=Dog+Bed",
        reviews: "5,621",
        product_url: "https://www.amazon.com/dp/B09XYZ1234",
    },
    Sample {
        asin: "B08HIJKLMN",
        title: "Automatic Pet Water Fountain - 2L Capacity with Filter",
        price: "$32.99",
        rating: "4.6",
        image_url: "https://via.placeholder.com/300x300/2196F3/FFFFFF?text=Water+Fountain",
        reviews: "9,445",
        product_url: "https://www.amazon.com/dp/B08HIJKLMN",
    },
    Sample {
        asin: "B06WXYZ789",
        title: "Retractable Dog Leash - 26ft Heavy Duty for Large Dogs",
        price: "$28.99",
        rating: "4.2",
        image_url: "https://via.placeholder.com/300x300/795548/FFFFFF?text=Dog+Leash",
        reviews: "7,112",
        product_url: "https://www.amazon.com/dp/B06WXYZ789",
    },
    Sample {
        asin: "B07QRSTUV",
        title: "Pet Grooming Kit - Professional Clippers and Scissors Set",
        price: "$45.99",
        rating: "4.3",
        image_url: "https://via.placeholder.com/300x300/FF9800/FFFFFF?text=Grooming+Kit",
        reviews: "3,287",
        product_url: "https://www.amazon.com/dp/B07QRSTUV",
    },
    Sample {
        asin: "B08TUVWXYZ",
        title: "Pet Carrier Backpack - Airline Approved with Ventilation",
        price: "$59.99",
        rating: "4.5",
        image_url: "https://via.placeholder.com/300x300/E91E63/FFFFFF?text=Pet+Carrier",
        reviews: "4,789",
        product_url: "https://www.amazon.com/dp/B08TUVWXYZ",
    },
    Sample {
        asin: "B07ABCD123",
        title: "Dog Training Treats - Natural Chicken Flavor 1lb Bag",
        price: "$15.99",
        rating: "4.7",
        image_url: "https://via.placeholder.com/300x300/8BC34A/FFFFFF?text=Dog+Treats",
        reviews: "18,934",
        product_url: "https://www.amazon.com/dp/B07ABCD123",
    },
];

/// The fixed sample listings, first `count` of them.
pub fn sample_listings(count: usize) -> Vec<Listing> {
    SAMPLES
        .iter()
        .take(count)
        .map(|s| Listing {
            asin: s.asin.to_string(),
            title: s.title.to_string(),
            price: s.price.to_string(),
            rating: s.rating.to_string(),
            image_url: s.image_url.to_string(),
            reviews: s.reviews.to_string(),
            product_url: s.product_url.to_string(),
        })
        .collect()
}

pub const SAMPLE_COUNT: usize = SAMPLES.len();
