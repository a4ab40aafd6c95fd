#[cfg(test)]
mod case_validation_tests;

#[cfg(test)]
mod dashboard_tests;

#[cfg(test)]
mod role_tests;

#[cfg(test)]
mod analytics_tests;

#[cfg(test)]
mod pdf_tests;
