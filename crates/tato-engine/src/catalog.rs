use std::sync::LazyLock;

use tato_types::{Category, Price, Product, ProductId};

/// The fixed shelf: id, name, price in cents, category, description.
const SHELF: [(u32, &str, u64, Category, &str); 20] = [
    (1, "Golden Crunch Fries", 599, Category::Fries, "Crispy outside, fluffy inside – perfect homemade fries."),
    (2, "Creamy Yukon Gold", 649, Category::Fresh, "Buttery smooth potatoes ideal for mashing."),
    (3, "Sweet Sunset Gems", 725, Category::Sweet, "Naturally sweet and packed with nutrients."),
    (4, "Garlic Herb Spuds", 699, Category::Seasoned, "Infused with aromatic garlic and herbs."),
    (5, "BBQ Roast Pack", 850, Category::Seasoned, "Smoky flavored potatoes for grill nights."),
    (6, "Mini Baby Taters", 549, Category::Fresh, "Small, tender potatoes perfect for roasting."),
    (7, "Classic Fry Cut", 630, Category::Fries, "Perfectly sliced for golden frying."),
    (8, "Hash Brown Ready", 685, Category::Breakfast, "Shredded potatoes for crispy breakfasts."),
    (9, "Potato Wedges Supreme", 845, Category::Fries, "Thick-cut wedges for sharing."),
    (10, "Truffle Luxury Box", 1299, Category::Premium, "Infused with elegant truffle aroma."),
    (11, "Purple Majesty", 820, Category::Premium, "Rich purple potatoes with antioxidants."),
    (12, "Air Fry Healthy Pack", 760, Category::Healthy, "Optimized for crispy air frying."),
    (13, "Spicy Fiesta Bites", 795, Category::Seasoned, "Bold spicy flavor explosion."),
    (14, "Loaded Baked Kit", 1050, Category::Premium, "Everything for loaded baked potatoes."),
    (15, "Organic Farm Russet", 670, Category::Fresh, "Farm-grown and naturally harvested."),
    (16, "Cheesy Seasoned Spuds", 940, Category::Seasoned, "Cheese-blended flavor boost."),
    (17, "Butter Roast Selection", 810, Category::Premium, "Perfect for buttery oven roasting."),
    (18, "Breakfast Gold Cubes", 695, Category::Breakfast, "Golden cubes for morning meals."),
    (19, "Sweet Potato Deluxe", 775, Category::Sweet, "Premium sweet potato experience."),
    (20, "Ultimate Tato Feast", 1599, Category::Premium, "All-in-one curated potato feast box."),
];

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(
        SHELF
            .iter()
            .map(|&(id, name, cents, category, description)| {
                Product::new(id, name, Price::from_cents(cents), category, description)
            })
            .collect(),
    )
});

/// The storefront catalog shared for the whole process.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Ordered, immutable product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
