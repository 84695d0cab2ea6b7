use crate::core::models::estimate::StorageClass;

/// Approximate USD per GB-month for one storage class. Real pricing varies
/// by region and tier volume.
#[derive(Debug, Clone)]
pub struct StoragePrice {
    pub class: StorageClass,
    pub per_gb_month: f64,
}

/// All known per-class rates.
static PRICING_TABLE: &[StoragePrice] = &[
    StoragePrice {
        class: StorageClass::Standard,
        per_gb_month: 0.023,
    },
    // Frequent Access tier
    StoragePrice {
        class: StorageClass::IntelligentTieringFrequentAccess,
        per_gb_month: 0.023,
    },
    StoragePrice {
        class: StorageClass::StandardInfrequentAccess,
        per_gb_month: 0.0125,
    },
    StoragePrice {
        class: StorageClass::OneZoneInfrequentAccess,
        per_gb_month: 0.01,
    },
    StoragePrice {
        class: StorageClass::Glacier,
        per_gb_month: 0.004,
    },
    StoragePrice {
        class: StorageClass::DeepArchive,
        per_gb_month: 0.00099,
    },
];

/// Monthly rate for a class; classes missing from the table fall back to
/// the Standard rate.
pub fn price_per_gb(class: StorageClass) -> f64 {
    PRICING_TABLE
        .iter()
        .find(|p| p.class == class)
        .map(|p| p.per_gb_month)
        .unwrap_or(0.023)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_class_has_a_rate() {
        assert_eq!(price_per_gb(StorageClass::Standard), 0.023);
        assert_eq!(
            price_per_gb(StorageClass::IntelligentTieringFrequentAccess),
            0.023
        );
        assert_eq!(price_per_gb(StorageClass::StandardInfrequentAccess), 0.0125);
        assert_eq!(price_per_gb(StorageClass::OneZoneInfrequentAccess), 0.01);
        assert_eq!(price_per_gb(StorageClass::Glacier), 0.004);
        assert_eq!(price_per_gb(StorageClass::DeepArchive), 0.00099);
    }

    #[test]
    fn table_covers_all_classes() {
        for class in StorageClass::ALL {
            assert!(PRICING_TABLE.iter().any(|p| p.class == class));
        }
    }
}
