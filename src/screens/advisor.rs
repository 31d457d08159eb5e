use super::{StateHolder, error_message};
use crate::core::fund::{AdvisorQuery, InvestmentHorizon, RiskTolerance, SmartAdvisorResponse};
use crate::core::usecase::GetSmartAdvisor;
use std::sync::Mutex;
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq)]
pub enum AdvisorState {
    /// Collecting parameters, nothing requested yet.
    Form,
    Loading,
    Success(SmartAdvisorResponse),
    Error(String),
}

/// Smart advisor form plus the result of the last request.
pub struct SmartAdvisorModel {
    use_case: GetSmartAdvisor,
    form: Mutex<AdvisorQuery>,
    state: StateHolder<AdvisorState>,
}

impl SmartAdvisorModel {
    pub fn new(use_case: GetSmartAdvisor) -> Self {
        Self {
            use_case,
            form: Mutex::new(AdvisorQuery::default()),
            state: StateHolder::new(AdvisorState::Form),
        }
    }

    fn update_form(&self, f: impl FnOnce(&mut AdvisorQuery)) {
        let mut form = self.form.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut form);
    }

    pub fn set_risk_tolerance(&self, value: RiskTolerance) {
        self.update_form(|form| form.risk_tolerance = value);
    }

    pub fn set_investment_horizon(&self, value: InvestmentHorizon) {
        self.update_form(|form| form.investment_horizon = value);
    }

    pub fn set_min_alpha(&self, value: Option<f64>) {
        self.update_form(|form| form.min_alpha = value);
    }

    pub fn set_max_volatility(&self, value: Option<f64>) {
        self.update_form(|form| form.max_volatility = value);
    }

    pub fn form(&self) -> AdvisorQuery {
        self.form.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Requests recommendations for the current form values.
    pub async fn get_recommendations(&self) -> AdvisorState {
        self.state.set(AdvisorState::Loading);

        let query = self.form();
        let state = match self.use_case.execute(&query).await {
            Ok(advice) => AdvisorState::Success(advice),
            Err(e) => AdvisorState::Error(error_message(&e)),
        };
        self.state.set(state.clone());
        state
    }

    pub fn reset_to_form(&self) {
        self.state.set(AdvisorState::Form);
    }

    pub fn state(&self) -> AdvisorState {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<AdvisorState> {
        self.state.subscribe()
    }
}
