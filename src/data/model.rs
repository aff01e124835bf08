use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Field – one numeric column of the dataset
// ---------------------------------------------------------------------------

/// The five supply-chain metrics, in generation (column) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    SupplierLeadTime,
    InventoryLevels,
    OrderFrequency,
    DeliveryPerformance,
    CostPerUnit,
}

impl Field {
    /// All fields in column order.
    pub const ALL: [Field; 5] = [
        Field::SupplierLeadTime,
        Field::InventoryLevels,
        Field::OrderFrequency,
        Field::DeliveryPerformance,
        Field::CostPerUnit,
    ];

    /// Column name as it appears in tables and exports.
    pub fn name(self) -> &'static str {
        match self {
            Field::SupplierLeadTime => "Supplier_Lead_Time",
            Field::InventoryLevels => "Inventory_Levels",
            Field::OrderFrequency => "Order_Frequency",
            Field::DeliveryPerformance => "Delivery_Performance",
            Field::CostPerUnit => "Cost_Per_Unit",
        }
    }

    /// Short axis label for the heatmap.
    pub fn short_name(self) -> &'static str {
        match self {
            Field::SupplierLeadTime => "Lead time",
            Field::InventoryLevels => "Inventory",
            Field::OrderFrequency => "Orders",
            Field::DeliveryPerformance => "Delivery",
            Field::CostPerUnit => "Cost",
        }
    }

    /// Position of the field in [`Field::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the dataset
// ---------------------------------------------------------------------------

/// A single row. Field names mirror the column names so CSV exports carry
/// the same header the tables show.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Record {
    #[serde(rename = "Supplier_Lead_Time")]
    pub supplier_lead_time: f64,
    #[serde(rename = "Inventory_Levels")]
    pub inventory_levels: f64,
    #[serde(rename = "Order_Frequency")]
    pub order_frequency: f64,
    #[serde(rename = "Delivery_Performance")]
    pub delivery_performance: f64,
    #[serde(rename = "Cost_Per_Unit")]
    pub cost_per_unit: f64,
}

impl Record {
    /// Build a record from values in [`Field::ALL`] order.
    pub fn from_values(values: [f64; 5]) -> Self {
        Record {
            supplier_lead_time: values[0],
            inventory_levels: values[1],
            order_frequency: values[2],
            delivery_performance: values[3],
            cost_per_unit: values[4],
        }
    }

    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::SupplierLeadTime => self.supplier_lead_time,
            Field::InventoryLevels => self.inventory_levels,
            Field::OrderFrequency => self.order_frequency,
            Field::DeliveryPerformance => self.delivery_performance,
            Field::CostPerUnit => self.cost_per_unit,
        }
    }

    /// Overwrite one field. Used by tests that need degenerate columns.
    #[cfg(test)]
    pub fn set(&mut self, field: Field, value: f64) {
        match field {
            Field::SupplierLeadTime => self.supplier_lead_time = value,
            Field::InventoryLevels => self.inventory_levels = value,
            Field::OrderFrequency => self.order_frequency = value,
            Field::DeliveryPerformance => self.delivery_performance = value,
            Field::CostPerUnit => self.cost_per_unit = value,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the full generated table
// ---------------------------------------------------------------------------

/// The immutable table produced once at startup. Row order is recency order:
/// the last row is the most recent.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first `n` rows, for the preview panel.
    pub fn head(&self, n: usize) -> &[Record] {
        &self.records[..n.min(self.records.len())]
    }
}

// ---------------------------------------------------------------------------
// Subset – the recency window
// ---------------------------------------------------------------------------

/// An owned copy of the last rows of a [`Dataset`].
#[derive(Debug, Clone, PartialEq)]
pub struct Subset {
    records: Vec<Record>,
    /// Index in the source dataset of the first row of the window.
    pub start: usize,
}

impl Subset {
    pub fn new(records: Vec<Record>, start: usize) -> Self {
        Subset { records, start }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All values of one column, in row order.
    pub fn column(&self, field: Field) -> Vec<f64> {
        self.records.iter().map(|r| r.get(field)).collect()
    }
}
