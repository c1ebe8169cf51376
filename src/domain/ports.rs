/// Source of the process-wide settings an invocation depends on.
pub trait ConfigProvider: Send + Sync {
    /// Raw intensity factor text (kg CO2 per kWh), parsed by the calculator.
    fn intensity_factor(&self) -> &str;
}
