//! Fixed token lists sampled by categorical and null-heavy columns.

/// A named list of candidate tokens for a categorical column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySource {
    /// Base column name for columns drawn from this source
    pub label: &'static str,
    /// Candidate values
    pub tokens: &'static [&'static str],
}

pub const FIRST_NAMES: &[&str] = &[
    "Emma", "Liam", "Olivia", "Noah", "Ava", "Ethan", "Sophia", "Mason", "Isabella", "William",
    "Mia", "James", "Charlotte", "Benjamin", "Amelia", "Lucas", "Harper", "Henry", "Evelyn",
    "Alexander", "Abigail", "Michael", "Emily", "Daniel", "Elizabeth", "Matthew", "Sofia",
    "Jackson", "Avery", "Sebastian", "Ella", "Jack", "Scarlett", "Aiden", "Grace", "Owen",
    "Chloe", "Samuel", "Victoria", "David", "Riley", "Joseph", "Aria", "Carter", "Lily",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green",
];

pub const CITIES: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia", "San Antonio",
    "San Diego", "Dallas", "San Jose", "Austin", "Jacksonville", "Fort Worth", "Columbus",
    "Charlotte", "San Francisco", "Indianapolis", "Seattle", "Denver", "Washington", "Boston",
    "Nashville", "Detroit", "Portland", "Las Vegas", "Memphis", "Louisville", "Baltimore",
    "Milwaukee", "Albuquerque", "Tucson", "Fresno", "Mesa", "Sacramento", "Atlanta",
    "Kansas City", "Colorado Springs", "Raleigh", "Miami", "Long Beach",
];

pub const COUNTRIES: &[&str] = &[
    "USA", "Canada", "Mexico", "UK", "France", "Germany", "Italy", "Spain", "Netherlands",
    "Belgium", "Switzerland", "Austria", "Sweden", "Norway", "Denmark", "Finland", "Poland",
    "Czech Republic", "Portugal", "Ireland", "Australia", "New Zealand", "Japan", "South Korea",
    "Singapore", "Brazil", "Argentina", "Chile", "Colombia", "Peru", "India", "China", "Thailand",
];

pub const DEPARTMENTS: &[&str] = &[
    "Engineering", "Sales", "Marketing", "Human Resources", "Finance", "Operations",
    "Customer Support", "Product", "Research", "Legal", "IT", "Analytics", "Design",
    "Quality Assurance", "Procurement",
];

pub const PRODUCTS: &[&str] = &[
    "Laptop", "Desktop", "Tablet", "Smartphone", "Monitor", "Keyboard", "Mouse", "Headphones",
    "Webcam", "Printer", "Scanner", "Router", "Hard Drive", "SSD", "RAM", "Graphics Card",
    "Motherboard", "CPU",
];

/// Sources cycled through by categorical columns, in order.
pub const CATEGORY_SOURCES: [CategorySource; 6] = [
    CategorySource {
        label: "first_name",
        tokens: FIRST_NAMES,
    },
    CategorySource {
        label: "last_name",
        tokens: LAST_NAMES,
    },
    CategorySource {
        label: "city",
        tokens: CITIES,
    },
    CategorySource {
        label: "country",
        tokens: COUNTRIES,
    },
    CategorySource {
        label: "department",
        tokens: DEPARTMENTS,
    },
    CategorySource {
        label: "product",
        tokens: PRODUCTS,
    },
];

/// Source used by the categorical column at `index`.
pub fn category_source(index: usize) -> &'static CategorySource {
    &CATEGORY_SOURCES[index % CATEGORY_SOURCES.len()]
}
