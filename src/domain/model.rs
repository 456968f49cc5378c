use crate::domain::ports::Conditions;
use crate::utils::error::{Result, StoreError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity and contact details of a person (customer or staff member).
///
/// The id is fixed at construction; every other field stays mutable through
/// its setter. The password is readable through `password()` but never shows
/// up in `Display` or `Debug` output.
#[derive(Clone, PartialEq)]
pub struct Person {
    id: u64,
    name: String,
    address: String,
    contact: String,
    date_of_birth: String,
    password: String,
}

impl Person {
    pub fn new(
        id: u64,
        name: String,
        address: String,
        contact: String,
        date_of_birth: String,
        password: String,
    ) -> Self {
        Self {
            id,
            name,
            address,
            contact,
            date_of_birth,
            password,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_address(&mut self, address: String) {
        self.address = address;
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn set_contact(&mut self, contact: String) {
        self.contact = contact;
    }

    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }

    pub fn set_date_of_birth(&mut self, date_of_birth: String) {
        self.date_of_birth = date_of_birth;
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn set_password(&mut self, password: String) {
        self.password = password;
    }
}

impl fmt::Display for Person {
    // Fixed summary order: id, name, address, contact, date of birth.
    // The password is deliberately left out.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person #{}: {}, {}, {}, born {}",
            self.id, self.name, self.address, self.contact, self.date_of_birth
        )
    }
}

impl fmt::Debug for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Person")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("address", &self.address)
            .field("contact", &self.contact)
            .field("date_of_birth", &self.date_of_birth)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Shelf item. Passed opaquely to the customer's operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub price: f64,
}

impl Item {
    pub fn new(id: u64, name: String, price: f64) -> Self {
        Self { id, name, price }
    }
}

/// Target storage conditions for stocked goods.
///
/// No ranges are enforced; the record stores whatever the caller sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimalCondition {
    temperature: f64,
    pressure: f64,
    moisture: f64,
    vibration: f64,
    period: u32,
}

impl OptimalCondition {
    pub fn new(
        temperature: f64,
        pressure: f64,
        moisture: f64,
        vibration: f64,
        period: u32,
    ) -> Self {
        Self {
            temperature,
            pressure,
            moisture,
            vibration,
            period,
        }
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature;
    }

    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    pub fn set_pressure(&mut self, pressure: f64) {
        self.pressure = pressure;
    }

    pub fn moisture(&self) -> f64 {
        self.moisture
    }

    pub fn set_moisture(&mut self, moisture: f64) {
        self.moisture = moisture;
    }

    pub fn vibration(&self) -> f64 {
        self.vibration
    }

    pub fn set_vibration(&mut self, vibration: f64) {
        self.vibration = vibration;
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn set_period(&mut self, period: u32) {
        self.period = period;
    }
}

impl fmt::Display for OptimalCondition {
    // Fixed order and unit suffixes: °C, kPa, %, (none), min. Floats use
    // `{:?}` so whole numbers keep their decimal: "40.0%", not "40%".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "temperature {:?}°C, pressure {:?}kPa, moisture {:?}%, vibration {:?}, period {}min",
            self.temperature, self.pressure, self.moisture, self.vibration, self.period
        )
    }
}

impl Conditions for OptimalCondition {
    // Nothing to provision for this kind yet.
    fn create(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Version tag written into every serialized veto document.
pub const VETO_SCHEMA_VERSION: u32 = 1;

/// A recorded decision blocking an action, with reason and initiator.
///
/// Set once at construction and read-only afterwards. `initiator` is the id
/// of the person who raised the veto; the person record itself lives (and
/// dies) elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Veto {
    vetoed: bool,
    reason: String,
    date: DateTime<Utc>,
    initiator: u64,
}

// Serialized shape of a veto. Kept separate from `Veto` so the version tag
// is an explicit part of the wire contract, not a marker on the record.
#[derive(Serialize, Deserialize)]
struct VetoDoc {
    schema_version: u32,
    vetoed: bool,
    reason: String,
    date: DateTime<Utc>,
    initiator: u64,
}

impl Veto {
    pub fn new(vetoed: bool, reason: String, date: DateTime<Utc>, initiator: u64) -> Self {
        Self {
            vetoed,
            reason,
            date,
            initiator,
        }
    }

    /// Raise an active veto now, attributed to `initiator`.
    pub fn raised(reason: String, initiator: &Person) -> Self {
        Self::new(true, reason, Utc::now(), initiator.id())
    }

    pub fn is_active(&self) -> bool {
        self.vetoed
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn initiator(&self) -> u64 {
        self.initiator
    }

    /// Encode as a JSON document carrying [`VETO_SCHEMA_VERSION`].
    pub fn to_json(&self) -> Result<String> {
        let doc = VetoDoc {
            schema_version: VETO_SCHEMA_VERSION,
            vetoed: self.vetoed,
            reason: self.reason.clone(),
            date: self.date,
            initiator: self.initiator,
        };
        Ok(serde_json::to_string(&doc)?)
    }

    /// Decode a JSON document, rejecting any schema version this build does
    /// not read.
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: VetoDoc = serde_json::from_str(json)?;
        if doc.schema_version != VETO_SCHEMA_VERSION {
            return Err(StoreError::SchemaVersionError {
                found: doc.schema_version,
                expected: VETO_SCHEMA_VERSION,
            });
        }
        Ok(Self::new(doc.vetoed, doc.reason, doc.date, doc.initiator))
    }
}

/// Action event as delivered by the host UI loop: the control it came from
/// and the command it carries.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionEvent {
    pub source: String,
    pub command: String,
}

impl ActionEvent {
    pub fn new(source: String, command: String) -> Self {
        Self { source, command }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_person() -> Person {
        Person::new(
            7,
            "Alex Doe".to_string(),
            "12 High St".to_string(),
            "555-0199".to_string(),
            "1988-04-02".to_string(),
            "hunter2".to_string(),
        )
    }

    #[test]
    fn test_person_accessor_roundtrip() {
        let mut person = sample_person();

        assert_eq!(person.id(), 7);
        assert_eq!(person.name(), "Alex Doe");
        assert_eq!(person.address(), "12 High St");
        assert_eq!(person.contact(), "555-0199");
        assert_eq!(person.date_of_birth(), "1988-04-02");
        assert_eq!(person.password(), "hunter2");

        person.set_name("Sam Roe".to_string());
        person.set_address("9 Low Rd".to_string());
        person.set_contact("555-0100".to_string());
        person.set_date_of_birth("1990-12-24".to_string());
        person.set_password("swordfish".to_string());

        assert_eq!(person.name(), "Sam Roe");
        assert_eq!(person.address(), "9 Low Rd");
        assert_eq!(person.contact(), "555-0100");
        assert_eq!(person.date_of_birth(), "1990-12-24");
        assert_eq!(person.password(), "swordfish");
    }

    #[test]
    fn test_person_display_summary() {
        let person = sample_person();
        assert_eq!(
            person.to_string(),
            "Person #7: Alex Doe, 12 High St, 555-0199, born 1988-04-02"
        );
    }

    #[test]
    fn test_person_display_independent_of_password() {
        let person = sample_person();
        assert!(!person.to_string().contains("hunter2"));

        // Even a password colliding with another field must not change the
        // summary: the rendering reads only the non-password fields.
        let mut collided = person.clone();
        collided.set_password(person.address().to_string());
        assert_eq!(person.to_string(), collided.to_string());
    }

    #[test]
    fn test_person_debug_redacts_password() {
        let person = sample_person();
        let dump = format!("{:?}", person);
        assert!(dump.contains("<redacted>"));
        assert!(!dump.contains("hunter2"));
    }

    #[test]
    fn test_optimal_condition_display_units_and_order() {
        let condition = OptimalCondition::new(21.5, 101.3, 40.0, 0.2, 30);
        assert_eq!(
            condition.to_string(),
            "temperature 21.5°C, pressure 101.3kPa, moisture 40.0%, vibration 0.2, period 30min"
        );
    }

    #[test]
    fn test_optimal_condition_create_is_a_noop() {
        let mut condition = OptimalCondition::new(21.5, 101.3, 40.0, 0.2, 30);
        let before = condition.clone();

        condition.create().unwrap();

        assert_eq!(condition, before);
    }

    #[test]
    fn test_optimal_condition_default_and_setters() {
        let mut condition = OptimalCondition::default();
        condition.set_temperature(4.0);
        condition.set_pressure(99.8);
        condition.set_moisture(85.5);
        condition.set_vibration(0.05);
        condition.set_period(15);

        assert_eq!(condition.temperature(), 4.0);
        assert_eq!(condition.pressure(), 99.8);
        assert_eq!(condition.moisture(), 85.5);
        assert_eq!(condition.vibration(), 0.05);
        assert_eq!(condition.period(), 15);
    }

    #[test]
    fn test_veto_reads_back_constructed_state() {
        let date = Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
        let veto = Veto::new(true, "damaged".to_string(), date, 7);

        assert!(veto.is_active());
        assert_eq!(veto.reason(), "damaged");
        assert_eq!(veto.date(), date);
        assert_eq!(veto.initiator(), 7);
    }

    #[test]
    fn test_veto_raised_stamps_initiator() {
        let clerk = sample_person();
        let veto = Veto::raised("payment declined".to_string(), &clerk);

        assert!(veto.is_active());
        assert_eq!(veto.initiator(), clerk.id());
    }

    #[test]
    fn test_veto_json_roundtrip() {
        let date = Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
        let veto = Veto::new(false, "lifted after inspection".to_string(), date, 3);

        let json = veto.to_json().unwrap();
        let decoded = Veto::from_json(&json).unwrap();

        assert_eq!(decoded, veto);
    }

    #[test]
    fn test_veto_json_embeds_schema_version() {
        let veto = Veto::new(true, "damaged".to_string(), Utc::now(), 1);
        let json = veto.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["schema_version"], VETO_SCHEMA_VERSION);
    }

    #[test]
    fn test_veto_rejects_unknown_schema_version() {
        let json = r#"{"schema_version":2,"vetoed":true,"reason":"damaged","date":"2024-06-01T09:30:00Z","initiator":7}"#;

        match Veto::from_json(json) {
            Err(StoreError::SchemaVersionError { found, expected }) => {
                assert_eq!(found, 2);
                assert_eq!(expected, VETO_SCHEMA_VERSION);
            }
            other => panic!("expected SchemaVersionError, got {:?}", other),
        }
    }

    #[test]
    fn test_veto_rejects_malformed_json() {
        let result = Veto::from_json("not a veto document");
        assert!(matches!(result, Err(StoreError::SerializationError(_))));
    }
}
