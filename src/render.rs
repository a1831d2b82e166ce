use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::{
    calculator::{Band, Calculation},
    catalog::record::BatteryRecord,
    prelude::*,
    quantity::{charge::MilliampHours, voltage::Volts},
};

pub const NO_RESULTS: &str = "No batteries match the filters.";

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum Layout {
    /// One row per battery.
    #[default]
    Table,

    /// One block per battery, for narrow terminals.
    Cards,

    /// Catalog document format.
    Json,
}

/// Render the filtered records into a printable document.
pub fn render_records(records: &[BatteryRecord], layout: Layout) -> Result<String> {
    match layout {
        Layout::Json => Ok(serde_json::to_string_pretty(records)?),
        _ if records.is_empty() => Ok(NO_RESULTS.to_owned()),
        Layout::Table => Ok(build_records_table(records).to_string()),
        Layout::Cards => {
            Ok(records.iter().map(|record| build_record_card(record).to_string()).join("\n"))
        }
    }
}

#[must_use]
pub fn build_records_table(records: &[BatteryRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec![
        "Brand", "Model", "Capacity", "Voltage", "Energy", "Carry-on", "Limit", "Notes",
    ]);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.brand),
            Cell::new(&record.model).add_attribute(Attribute::Bold),
            Cell::new(record.capacity).set_alignment(CellAlignment::Right),
            Cell::new(record.voltage).set_alignment(CellAlignment::Right),
            Cell::new(record.energy)
                .set_alignment(CellAlignment::Right)
                .fg(Band::of(record.energy).color()),
            Cell::new(record.carry_on_status.label()).fg(record.carry_on_status.color()),
            Cell::new(quantity_limit_label(record)).set_alignment(CellAlignment::Right),
            Cell::new(&record.notes).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

#[must_use]
pub fn build_record_card(record: &BatteryRecord) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec![
        Cell::new(format!("{} {}", record.brand, record.model)).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    table.add_row(vec![Cell::new("용량"), Cell::new(record.capacity)]);
    table.add_row(vec![Cell::new("전압"), Cell::new(record.voltage)]);
    table.add_row(vec![
        Cell::new("전력량"),
        Cell::new(record.energy).fg(Band::of(record.energy).color()),
    ]);
    table.add_row(vec![
        Cell::new("반입 가능"),
        Cell::new(record.carry_on_status.label()).fg(record.carry_on_status.color()),
    ]);
    table.add_row(vec![Cell::new("수량 제한"), Cell::new(quantity_limit_label(record))]);
    table.add_row(vec![Cell::new("주의사항"), Cell::new(&record.notes)]);
    table
}

#[must_use]
pub fn build_calculation_table(
    capacity: MilliampHours,
    voltage: Volts,
    calculation: &Calculation,
) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Capacity", "Voltage", "Energy", "Band"]);
    let (energy_color, band_cell) = if calculation.is_zero() {
        (Color::Reset, Cell::new("-"))
    } else {
        let color = calculation.band.color();
        (color, Cell::new(format!("{} ({})", calculation.band, calculation.band.advice())).fg(color))
    };
    table.add_row(vec![
        Cell::new(capacity).set_alignment(CellAlignment::Right),
        Cell::new(voltage).set_alignment(CellAlignment::Right),
        Cell::new(calculation).set_alignment(CellAlignment::Right).fg(energy_color),
        band_cell,
    ]);
    table
}

fn quantity_limit_label(record: &BatteryRecord) -> String {
    record.quantity_limit().map_or_else(|| "-".to_owned(), |limit| format!("{limit}개"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::status::CarryOnStatus;

    fn records() -> Vec<BatteryRecord> {
        vec![
            BatteryRecord::builder()
                .brand("Anker")
                .model("PowerCore 20000")
                .capacity(20_000.0)
                .voltage(3.7)
                .energy(74.0)
                .carry_on_status(CarryOnStatus::Allowed)
                .build(),
            BatteryRecord::builder()
                .brand("Jackery")
                .model("Explorer 100 Plus")
                .capacity(31_000.0)
                .voltage(3.2)
                .energy(99.2)
                .carry_on_status("checked_only")
                .max_quantity(2)
                .notes("Airline approval <required>")
                .build(),
        ]
    }

    #[test]
    fn test_render_empty() -> Result {
        assert_eq!(render_records(&[], Layout::Table)?, NO_RESULTS);
        assert_eq!(render_records(&[], Layout::Cards)?, NO_RESULTS);
        assert_eq!(render_records(&[], Layout::Json)?, "[]");
        Ok(())
    }

    #[test]
    fn test_render_table() -> Result {
        let rendered = render_records(&records(), Layout::Table)?;
        assert!(rendered.contains("PowerCore 20000"));
        assert!(rendered.contains("20,000 mAh"));
        assert!(rendered.contains("74 Wh"));
        assert!(rendered.contains("가능"));
        assert!(rendered.contains("checked_only"));
        assert!(rendered.contains("2개"));
        assert!(rendered.contains("Airline approval <required>"));
        Ok(())
    }

    #[test]
    fn test_render_cards() -> Result {
        let rendered = render_records(&records(), Layout::Cards)?;
        assert!(rendered.contains("Anker PowerCore 20000"));
        assert!(rendered.contains("수량 제한"));
        assert!(rendered.contains("31,000 mAh"));
        Ok(())
    }

    #[test]
    fn test_render_json_round_trips() -> Result {
        let rendered = render_records(&records(), Layout::Json)?;
        let parsed: Vec<BatteryRecord> = serde_json::from_str(&rendered)?;
        assert_eq!(parsed, records());
        Ok(())
    }

    #[test]
    fn test_calculation_table() {
        let capacity = MilliampHours::from(30_000.0);
        let voltage = Volts::from(3.7);
        let table =
            build_calculation_table(capacity, voltage, &Calculation::compute(capacity, voltage))
                .to_string();
        assert!(table.contains("111.00 Wh"));
        assert!(table.contains("caution"));
    }
}
