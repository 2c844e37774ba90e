use super::ui;
use crate::config::AppConfig;
use crate::countries::CountryProvider;
use crate::form::ConverterForm;
use crate::rates::RateProvider;
use anyhow::Result;
use comfy_table::Cell;

pub async fn run(
    rate_provider: &(dyn RateProvider + Send + Sync),
    country_provider: &(dyn CountryProvider + Send + Sync),
    config: &AppConfig,
) -> Result<()> {
    let mut form = ConverterForm::new();
    super::load_currencies(&mut form, rate_provider, country_provider, config).await;

    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Code"), ui::header_cell("Flag")]);

    for code in form.currencies() {
        let flag = ui::format_optional_cell(form.flag(code), |url| url.to_string());
        table.add_row(vec![Cell::new(code), flag]);
    }

    println!("{table}");
    Ok(())
}
