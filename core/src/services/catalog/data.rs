//! Static service taxonomy and keyed lookups

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// The marketplace taxonomy in declaration order. Category names are
/// unique; sub-service names are globally unique in this dataset, which
/// the reverse lookup relies on (first match wins if that ever changes).
pub static CATALOG: ServiceCatalog = ServiceCatalog {
    entries: &[
        (
            "Plumber",
            &[
                "Leak Repair",
                "Toilet Clog",
                "Drain Cleaning",
                "Water Heater Installation",
                "Pipe Replacement",
            ],
        ),
        (
            "Electrician",
            &[
                "Wiring Repair",
                "Light Fixture Installation",
                "Circuit Breaker Replacement",
                "Ceiling Fan Installation",
            ],
        ),
        (
            "Handyman",
            &[
                "Furniture Assembly",
                "Picture Mounting",
                "Door Repair",
                "Shelf Installation",
            ],
        ),
        (
            "Cleaner",
            &[
                "Deep Cleaning",
                "Move-Out Cleaning",
                "Carpet Cleaning",
                "Window Washing",
            ],
        ),
        (
            "Painter",
            &[
                "Interior Painting",
                "Exterior Painting",
                "Cabinet Refinishing",
            ],
        ),
        (
            "Accountant",
            &[
                "Tax Filing",
                "Bookkeeping",
                "Payroll Setup",
                "Financial Planning",
            ],
        ),
        (
            "Landscaper",
            &["Lawn Mowing", "Hedge Trimming", "Garden Design"],
        ),
        (
            "Mover",
            &["Local Moving", "Furniture Delivery", "Packing Service"],
        ),
    ],
};

/// Reverse index: sub-service name -> category name. Built lazily on first
/// reverse lookup; earlier categories win on (never expected) duplicates.
static SUB_SERVICE_INDEX: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for (category, subs) in CATALOG.entries {
        for sub in *subs {
            index.entry(*sub).or_insert(*category);
        }
    }
    index
});

/// The static two-level service taxonomy
pub struct ServiceCatalog {
    pub(super) entries: &'static [(&'static str, &'static [&'static str])],
}

impl ServiceCatalog {
    /// All categories in declaration order
    pub fn categories(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(category, _)| *category)
    }

    /// Sub-services for an exact category key; empty for unknown keys
    pub fn sub_services(&self, category: &str) -> &'static [&'static str] {
        self.entries
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, subs)| *subs)
            .unwrap_or(&[])
    }

    /// Exact-key category membership test
    pub fn is_category(&self, name: &str) -> bool {
        self.entries.iter().any(|(category, _)| *category == name)
    }

    /// True if `name` appears in any category's sub-service list
    pub fn is_sub_service(&self, name: &str) -> bool {
        SUB_SERVICE_INDEX.contains_key(name)
    }

    /// First category (in catalog order) listing `name` as a sub-service
    pub fn category_for_sub_service(&self, name: &str) -> Option<&'static str> {
        SUB_SERVICE_INDEX.get(name).copied()
    }
}
