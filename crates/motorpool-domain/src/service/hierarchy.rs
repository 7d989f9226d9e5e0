//! Queries over the declared kind hierarchy

use crate::model::VehicleKind;

/// Chain from `kind` up to the root, `kind` first
pub fn ancestry(kind: VehicleKind) -> Vec<VehicleKind> {
    std::iter::successors(Some(kind), |k| k.parent()).collect()
}

/// Kinds whose direct parent is `kind`, in declaration order
pub fn direct_specializations(kind: VehicleKind) -> Vec<VehicleKind> {
    VehicleKind::ALL
        .into_iter()
        .filter(|k| k.parent() == Some(kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ancestry() {
        assert_eq!(ancestry(VehicleKind::Vehicle), vec![VehicleKind::Vehicle]);
        assert_eq!(
            ancestry(VehicleKind::Truck),
            vec![VehicleKind::Truck, VehicleKind::Vehicle]
        );
    }

    #[test]
    fn test_direct_specializations() {
        assert_eq!(
            direct_specializations(VehicleKind::Vehicle),
            vec![VehicleKind::Car, VehicleKind::Truck, VehicleKind::Motorcycle]
        );
        assert!(direct_specializations(VehicleKind::Car).is_empty());
    }

    #[test]
    fn test_ancestry_agrees_with_specialization() {
        for kind in VehicleKind::ALL {
            for other in VehicleKind::ALL {
                assert_eq!(
                    ancestry(kind).contains(&other),
                    kind.is_specialization_of(other)
                );
            }
        }
    }
}
