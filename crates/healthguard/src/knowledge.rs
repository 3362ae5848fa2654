//! Static symptom knowledge table
//!
//! The table is built once at startup and never mutated. Entries keep their
//! insertion order, which is also the order matches are reported and rendered.

/// Conditions, advice and warnings for one symptom key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomEntry {
    /// Lowercase lookup key; doubles as the substring pattern
    pub name: String,
    pub conditions: Vec<String>,
    pub advice: Vec<String>,
    pub warning: String,
    pub prevention: Option<String>,
}

impl SymptomEntry {
    pub fn new(
        name: impl Into<String>,
        conditions: &[&str],
        advice: &[&str],
        warning: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().to_lowercase(),
            conditions: conditions.iter().map(|s| s.to_string()).collect(),
            advice: advice.iter().map(|s| s.to_string()).collect(),
            warning: warning.into(),
            prevention: None,
        }
    }

    pub fn with_prevention(mut self, prevention: impl Into<String>) -> Self {
        self.prevention = Some(prevention.into());
        self
    }

    /// Display title, first letter uppercased ("chest pain" -> "Chest pain")
    pub fn title(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Ordered mapping from symptom key to entry
#[derive(Debug, Clone, Default)]
pub struct KnowledgeTable {
    entries: Vec<SymptomEntry>,
}

impl KnowledgeTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from entries, keeping the first entry for a duplicate key
    pub fn from_entries(entries: impl IntoIterator<Item = SymptomEntry>) -> Self {
        let mut table = Self::empty();
        for entry in entries {
            table.insert(entry);
        }
        table
    }

    /// Insert an entry. Returns false (and leaves the table unchanged) if the key exists.
    pub fn insert(&mut self, entry: SymptomEntry) -> bool {
        if self.get(&entry.name).is_some() {
            tracing::warn!("Duplicate symptom key ignored: {}", entry.name);
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn get(&self, name: &str) -> Option<&SymptomEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &SymptomEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The built-in table shipped with the agents
    pub fn builtin() -> Self {
        Self::from_entries([
            SymptomEntry::new(
                "headache",
                &["Tension headache", "Migraine", "Dehydration", "Eye strain"],
                &[
                    "Rest in a quiet, dark room",
                    "Apply cold or warm compress",
                    "Stay hydrated",
                    "Avoid bright lights and loud sounds",
                    "Consider over-the-counter pain relief",
                ],
                "Seek immediate care if headache is sudden and severe, or accompanied by fever, stiff neck, confusion, or vision changes.",
            )
            .with_prevention("Keep regular sleep hours, limit screen time, and drink water throughout the day."),
            SymptomEntry::new(
                "fever",
                &["Viral infection", "Bacterial infection", "Heat exhaustion", "Common cold", "Flu"],
                &[
                    "Monitor temperature regularly",
                    "Stay well hydrated",
                    "Rest and avoid strenuous activity",
                    "Use fever-reducing medication as directed",
                    "Wear light, breathable clothing",
                ],
                "Seek medical attention if fever exceeds 103°F (39.4°C), lasts more than 3 days, or is accompanied by severe symptoms.",
            ),
            SymptomEntry::new(
                "cough",
                &["Common cold", "Bronchitis", "Allergies", "Asthma", "Flu"],
                &[
                    "Stay hydrated with warm fluids",
                    "Use honey (for adults and children over 1 year)",
                    "Try steam inhalation",
                    "Avoid irritants like smoke",
                    "Consider cough suppressants if dry cough",
                ],
                "Consult a doctor if cough persists beyond 3 weeks, produces blood, or is accompanied by high fever or difficulty breathing.",
            )
            .with_prevention("Wash hands often and avoid smoke and other airway irritants."),
            SymptomEntry::new(
                "fatigue",
                &["Sleep deprivation", "Anemia", "Thyroid issues", "Depression", "Dehydration"],
                &[
                    "Ensure 7-9 hours of quality sleep",
                    "Maintain regular exercise routine",
                    "Eat balanced, nutritious meals",
                    "Manage stress through relaxation techniques",
                    "Stay hydrated throughout the day",
                ],
                "Persistent unexplained fatigue lasting more than 2 weeks should be evaluated by a healthcare provider.",
            ),
            SymptomEntry::new(
                "nausea",
                &["Food poisoning", "Gastritis", "Motion sickness", "Pregnancy", "Migraine"],
                &[
                    "Sip clear fluids slowly",
                    "Eat bland foods (crackers, rice, toast)",
                    "Avoid strong odors",
                    "Get fresh air",
                    "Try ginger tea or peppermint",
                ],
                "Seek immediate care if nausea is accompanied by severe abdominal pain, blood in vomit, signs of dehydration, or chest pain.",
            )
            .with_prevention("Store and cook food safely, and eat smaller meals when traveling."),
            SymptomEntry::new(
                "sore throat",
                &["Viral pharyngitis", "Strep throat", "Allergies", "Dry air"],
                &[
                    "Gargle with warm salt water",
                    "Drink warm fluids (tea, soup)",
                    "Use a humidifier",
                    "Rest your voice",
                ],
                "See a doctor if sore throat lasts more than a week, or comes with high fever, rash, or difficulty swallowing.",
            ),
            SymptomEntry::new(
                "dizziness",
                &["Dehydration", "Low blood pressure", "Inner ear problems", "Low blood sugar"],
                &[
                    "Sit or lie down right away",
                    "Drink water slowly",
                    "Stand up gradually",
                    "Avoid driving until it passes",
                ],
                "Seek immediate care if dizziness comes with fainting, chest pain, slurred speech, or weakness on one side.",
            ),
            SymptomEntry::new(
                "chest pain",
                &["Heart attack", "Angina", "Muscle strain", "Anxiety"],
                &[
                    "🚨 CALL EMERGENCY SERVICES IMMEDIATELY",
                    "Do not drive yourself",
                    "Chew aspirin if not allergic",
                    "Stay calm and rest",
                ],
                "⚠️ EMERGENCY: Chest pain can be life-threatening. Seek immediate medical attention!",
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_keys_in_order() {
        let table = KnowledgeTable::builtin();
        let keys: Vec<_> = table.keys().collect();
        assert_eq!(
            keys,
            vec!["headache", "fever", "cough", "fatigue", "nausea", "sore throat", "dizziness", "chest pain"]
        );
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut table = KnowledgeTable::empty();
        assert!(table.insert(SymptomEntry::new("rash", &["Eczema"], &["Moisturize"], "first")));
        assert!(!table.insert(SymptomEntry::new("rash", &["Hives"], &["Antihistamine"], "second")));

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("rash").unwrap().warning, "first");
    }

    #[test]
    fn test_keys_are_lowercased() {
        let entry = SymptomEntry::new("Back Pain", &[], &[], "w");
        assert_eq!(entry.name, "back pain");
        assert_eq!(entry.title(), "Back pain");
    }

    #[test]
    fn test_prevention_is_optional() {
        let table = KnowledgeTable::builtin();
        assert!(table.get("headache").unwrap().prevention.is_some());
        assert!(table.get("fever").unwrap().prevention.is_none());
    }
}
