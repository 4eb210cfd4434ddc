pub mod ddl;
pub mod dialect;
pub mod order;
pub mod schema;

use wasm_bindgen::prelude::*;

use ddl::{print_ddl, Config, DdlError, EmitMode};
use dialect::Dialect;
use schema::Schema;

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Render a JSON-encoded schema snapshot to DDL statements joined by blank
/// lines
#[wasm_bindgen(js_name = "schemaToDdl")]
pub fn schema_to_ddl(
    schema_json: &str,
    dialect: Option<String>,
    emit: Option<String>,
) -> Result<String, String> {
    let schema: Schema = serde_json::from_str(schema_json).map_err(|e| e.to_string())?;

    let dialect = match dialect.as_deref() {
        Some(s) => Dialect::from_str(s)
            .ok_or_else(|| DdlError::UnsupportedDialect(s.to_string()).to_string())?,
        None => Dialect::default(),
    };
    let mode = emit
        .as_deref()
        .and_then(EmitMode::from_str)
        .unwrap_or(EmitMode::All);

    print_ddl(&schema, &Config::for_mode(mode, dialect)).map_err(|e| e.to_string())
}
