//! Built-in problem instances.

use crate::distance::DistanceTable;

/// Ten cities of Minas Gerais, Brazil.
pub const MINAS_GERAIS_CITIES: [&str; 10] = [
    "Itaúna",
    "Divinópolis",
    "Belo Horizonte",
    "Montes Claros",
    "Viçosa",
    "Lavras",
    "Ouro Preto",
    "Janaúba",
    "Monte Verde",
    "Governador Valadares",
];

// Row-major, indexed by `MINAS_GERAIS_CITIES`. Not symmetric: the Ouro Preto
// row differs from its column in a few entries.
const MINAS_GERAIS_KM: [[f64; 10]; 10] = [
    [0.0, 41.1, 86.3, 476.0, 293.0, 198.0, 169.0, 608.0, 441.0, 391.0],
    [41.1, 0.0, 124.0, 467.0, 331.0, 166.0, 207.0, 598.0, 408.0, 429.0],
    [86.3, 124.0, 0.0, 420.0, 226.0, 238.0, 102.0, 553.0, 481.0, 315.0],
    [476.0, 467.0, 420.0, 0.0, 637.0, 634.0, 513.0, 135.0, 877.0, 497.0],
    [293.0, 331.0, 226.0, 637.0, 0.0, 296.0, 128.0, 767.0, 586.0, 305.0],
    [198.0, 166.0, 238.0, 634.0, 296.0, 0.0, 281.0, 762.0, 276.0, 276.0],
    [169.0, 207.0, 102.0, 60.0, 513.0, 128.0, 0.0, 645.0, 525.0, 340.0],
    [608.0, 598.0, 553.0, 135.0, 767.0, 762.0, 645.0, 0.0, 1180.0, 629.0],
    [441.0, 408.0, 481.0, 877.0, 586.0, 276.0, 525.0, 1180.0, 0.0, 793.0],
    [391.0, 429.0, 315.0, 497.0, 305.0, 276.0, 340.0, 629.0, 793.0, 0.0],
];

/// Road distances (km) between [`MINAS_GERAIS_CITIES`].
pub fn minas_gerais() -> DistanceTable<&'static str> {
    DistanceTable::from_rows(MINAS_GERAIS_CITIES.iter().zip(MINAS_GERAIS_KM.iter()).map(
        |(&from, row)| {
            let neighbours = MINAS_GERAIS_CITIES.iter().copied().zip(row.iter().copied());
            (from, neighbours)
        },
    ))
}

/// Four corners of a unit square, `A-B-C-D` in order.
///
/// Sides measure 1, diagonals 2, so the optimal tour has length 4.
pub fn unit_square() -> DistanceTable<&'static str> {
    let mut table = DistanceTable::new();
    for corner in ["A", "B", "C", "D"] {
        table.insert(corner, corner, 0.0);
    }
    table.insert_symmetric("A", "B", 1.0);
    table.insert_symmetric("B", "C", 1.0);
    table.insert_symmetric("C", "D", 1.0);
    table.insert_symmetric("D", "A", 1.0);
    table.insert_symmetric("A", "C", 2.0);
    table.insert_symmetric("B", "D", 2.0);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceOracle;

    #[test]
    fn test_minas_gerais_complete() {
        let table = minas_gerais();
        assert_eq!(table.len(), 10);
        assert_eq!(table.locations(), MINAS_GERAIS_CITIES.to_vec());
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_minas_gerais_keeps_asymmetric_entries() {
        let table = minas_gerais();
        assert_eq!(table.distance(&"Ouro Preto", &"Montes Claros"), Ok(60.0));
        assert_eq!(table.distance(&"Montes Claros", &"Ouro Preto"), Ok(513.0));
        assert_eq!(table.distance(&"Itaúna", &"Divinópolis"), Ok(41.1));
        assert!(!table.is_symmetric());
    }

    #[test]
    fn test_unit_square() {
        let table = unit_square();
        assert!(table.validate().is_ok());
        assert!(table.is_symmetric());
        assert_eq!(table.distance(&"A", &"C"), Ok(2.0));
        assert_eq!(table.distance(&"D", &"A"), Ok(1.0));
    }
}
