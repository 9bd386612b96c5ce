//! Seed collection loaded into the catalog at startup.

use crate::product::NewProduct;

struct SeedRow {
    id: u32,
    name: &'static str,
    description: &'static str,
    price: f64,
    category: &'static str,
    rating: f64,
    reviews: u32,
    image: &'static str,
    in_stock: bool,
    brand: &'static str,
    features: &'static [&'static str],
}

impl From<&SeedRow> for NewProduct {
    fn from(row: &SeedRow) -> Self {
        Self {
            id: row.id,
            name: row.name.to_string(),
            description: row.description.to_string(),
            price: row.price,
            category: row.category.to_string(),
            rating: row.rating,
            reviews: row.reviews,
            image: row.image.to_string(),
            in_stock: row.in_stock,
            brand: row.brand.to_string(),
            features: row.features.iter().map(|f| f.to_string()).collect(),
        }
    }
}

const SEED: &[SeedRow] = &[
    SeedRow {
        id: 1,
        name: "Wireless Noise-Canceling Headphones",
        description: "Premium over-ear headphones with active noise cancellation and 30-hour battery life. Perfect for travel and daily commuting.",
        price: 299.99,
        category: "Electronics",
        rating: 4.8,
        reviews: 2847,
        image: "https://images.pexels.com/photos/3394650/pexels-photo-3394650.jpeg?auto=compress&cs=tinysrgb&w=500",
        in_stock: true,
        brand: "AudioTech Pro",
        features: &["Active Noise Cancellation", "30-hour battery", "Bluetooth 5.0", "Quick charge"],
    },
    SeedRow {
        id: 2,
        name: "Smart Fitness Watch",
        description: "Advanced fitness tracker with heart rate monitoring, GPS, and smartphone integration. Track your workouts and health metrics.",
        price: 199.99,
        category: "Electronics",
        rating: 4.6,
        reviews: 1923,
        image: "https://images.pexels.com/photos/393047/pexels-photo-393047.jpeg?auto=compress&cs=tinysrgb&w=500",
        in_stock: true,
        brand: "FitTech",
        features: &["Heart rate monitor", "GPS tracking", "Water resistant", "7-day battery"],
    },
    SeedRow {
        id: 3,
        name: "Organic Cotton T-Shirt",
        description: "Comfortable and sustainable organic cotton t-shirt. Soft fabric with a modern fit, perfect for casual wear.",
        price: 29.99,
        category: "Clothing",
        rating: 4.4,
        reviews: 756,
        image: "https://images.pexels.com/photos/1488463/pexels-photo-1488463.jpeg?auto=compress&cs=tinysrgb&w=500",
        in_stock: true,
        brand: "EcoWear",
        features: &["100% organic cotton", "Machine washable", "Multiple colors", "Unisex design"],
    },
    SeedRow {
        id: 4,
        name: "Ceramic Non-Stick Pan Set",
        description: "Professional-grade ceramic non-stick cookware set. Includes 8\", 10\", and 12\" pans with ergonomic handles.",
        price: 89.99,
        category: "Home & Kitchen",
        rating: 4.7,
        reviews: 1245,
        image: "https://images.pexels.com/photos/4226796/pexels-photo-4226796.jpeg?auto=compress&cs=tinysrgb&w=500",
        in_stock: true,
        brand: "ChefMaster",
        features: &["Ceramic coating", "Dishwasher safe", "Heat-resistant handles", "3-piece set"],
    },
    SeedRow {
        id: 5,
        name: "Leather Laptop Backpack",
        description: "Stylish genuine leather backpack with padded laptop compartment. Perfect for professionals and students.",
        price: 149.99,
        category: "Accessories",
        rating: 4.5,
        reviews: 892,
        image: "https://images.pexels.com/photos/2905238/pexels-photo-2905238.jpeg?auto=compress&cs=tinysrgb&w=500",
        in_stock: true,
        brand: "UrbanCarry",
        features: &["Genuine leather", "Laptop compartment", "Multiple pockets", "Adjustable straps"],
    },
    SeedRow {
        id: 6,
        name: "Wireless Bluetooth Speaker",
        description: "Portable Bluetooth speaker with 360-degree sound and waterproof design. Perfect for outdoor adventures.",
        price: 79.99,
        category: "Electronics",
        rating: 4.3,
        reviews: 1567,
        image: "https://images.pexels.com/photos/1649771/pexels-photo-1649771.jpeg?auto=compress&cs=tinysrgb&w=500",
        in_stock: true,
        brand: "SoundWave",
        features: &["360-degree sound", "Waterproof", "12-hour battery", "Bluetooth 5.0"],
    },
    SeedRow {
        id: 7,
        name: "Yoga Mat with Alignment Lines",
        description: "Premium yoga mat with alignment guides and non-slip surface. Made from eco-friendly materials.",
        price: 49.99,
        category: "Sports & Fitness",
        rating: 4.6,
        reviews: 634,
        image: "https://images.pexels.com/photos/3822906/pexels-photo-3822906.jpeg?auto=compress&cs=tinysrgb&w=500",
        in_stock: true,
        brand: "ZenFlex",
        features: &["Alignment guides", "Non-slip surface", "Eco-friendly", "Carrying strap"],
    },
    SeedRow {
        id: 8,
        name: "Stainless Steel Water Bottle",
        description: "Insulated stainless steel water bottle that keeps drinks cold for 24 hours or hot for 12 hours.",
        price: 34.99,
        category: "Sports & Fitness",
        rating: 4.7,
        reviews: 2156,
        image: "https://images.pexels.com/photos/7880032/pexels-photo-7880032.jpeg",
        in_stock: true,
        brand: "HydroMax",
        features: &["Double-wall insulation", "BPA-free", "Leak-proof", "Multiple sizes"],
    },
    SeedRow {
        id: 9,
        name: "Casual Denim Jeans",
        description: "Classic straight-fit denim jeans made from premium cotton blend. Comfortable and durable for everyday wear.",
        price: 69.99,
        category: "Clothing",
        rating: 4.4,
        reviews: 1834,
        image: "https://images.pexels.com/photos/1598507/pexels-photo-1598507.jpeg?auto=compress&cs=tinysrgb&w=500",
        in_stock: true,
        brand: "DenimCraft",
        features: &["Premium cotton blend", "Straight fit", "Reinforced stitching", "Multiple washes"],
    },
    SeedRow {
        id: 10,
        name: "Smart Home LED Bulbs",
        description: "WiFi-enabled smart LED bulbs with color changing capabilities. Control with smartphone app or voice commands.",
        price: 24.99,
        category: "Home & Kitchen",
        rating: 4.2,
        reviews: 987,
        image: "https://images.pexels.com/photos/1036936/pexels-photo-1036936.jpeg?auto=compress&cs=tinysrgb&w=500",
        in_stock: true,
        brand: "SmartHome",
        features: &["WiFi enabled", "Color changing", "Voice control", "Energy efficient"],
    },
    SeedRow {
        id: 11,
        name: "Wooden Cutting Board Set",
        description: "Handcrafted bamboo cutting board set with three different sizes. Includes knife grooves and juice channels.",
        price: 45.99,
        category: "Home & Kitchen",
        rating: 4.8,
        reviews: 1432,
        image: "https://images.pexels.com/photos/4226140/pexels-photo-4226140.jpeg?auto=compress&cs=tinysrgb&w=500",
        in_stock: true,
        brand: "KitchenCraft",
        features: &["Bamboo construction", "Knife grooves", "Juice channels", "3-piece set"],
    },
    SeedRow {
        id: 12,
        name: "Wireless Gaming Mouse",
        description: "High-precision wireless gaming mouse with customizable RGB lighting and programmable buttons.",
        price: 89.99,
        category: "Electronics",
        rating: 4.6,
        reviews: 1245,
        image: "https://images.pexels.com/photos/2115257/pexels-photo-2115257.jpeg?auto=compress&cs=tinysrgb&w=500",
        in_stock: false,
        brand: "GamePro",
        features: &["Wireless", "RGB lighting", "Programmable buttons", "High DPI sensor"],
    },
];

/// The default product collection, in catalog order.
pub fn seed_products() -> Vec<NewProduct> {
    SEED.iter().map(NewProduct::from).collect()
}
