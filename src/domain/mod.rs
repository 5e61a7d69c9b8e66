// Domain layer: the editable record, its typed field names and the ports the core talks through.

pub mod fields;
pub mod model;
pub mod ports;
