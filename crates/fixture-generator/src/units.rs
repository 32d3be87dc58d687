//! Organizational unit master data.

use crate::generator::GeneratorError;
use fixture_core::config::MIN_UNIT_COUNT;
use fixture_core::Unit;

/// Hand-authored units: (code, name, level). Ids are assigned 1..=10 in order.
pub const HAND_AUTHORED_UNITS: [(&str, &str, u8); 10] = [
    ("REK", "Rektorat", 1),
    ("BAU", "Biro Akademik Umum", 2),
    ("BUPK", "Biro Umum dan Keuangan", 2),
    ("FSAINS", "Fakultas Sains", 2),
    ("FTI", "Fakultas Teknologi Industri", 2),
    ("JTIK", "Jurusan Teknologi Produksi dan Industri", 3),
    ("JSTP", "Jurusan Sains", 3),
    ("PRODI-SD", "Prodi Sains Data", 4),
    ("PRODI-IF", "Prodi Informatika", 4),
    ("UPT-TIK", "UPT TIK", 3),
];

/// Level of every mechanically numbered unit.
const GENERATED_UNIT_LEVEL: u8 = 4;

/// Build `count` units: the hand-authored rows followed by `UNIT{n}` rows.
///
/// Consumes no randomness.
pub fn build_units(count: u64) -> Result<Vec<Unit>, GeneratorError> {
    if count < MIN_UNIT_COUNT {
        return Err(GeneratorError::InsufficientUnits { requested: count });
    }

    let mut units: Vec<Unit> = HAND_AUTHORED_UNITS
        .iter()
        .zip(1u32..)
        .map(|(&(code, name, level), id)| Unit::new(id, code, name, level))
        .collect();

    for n in (HAND_AUTHORED_UNITS.len() as u64 + 1)..=count {
        let id = u32::try_from(n).map_err(|_| GeneratorError::CountOverflow {
            dataset: "units",
            count,
        })?;
        units.push(Unit::new(
            id,
            format!("UNIT{id}"),
            format!("Unit Kerja {id}"),
            GENERATED_UNIT_LEVEL,
        ));
    }

    Ok(units)
}
