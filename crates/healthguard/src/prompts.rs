//! Centralized message templates.
//!
//! Every fixed text the agents send lives here. None of them are
//! interpolated.

/// Sent when a session starts
pub const WELCOME_MESSAGE: &str = "👋 Hello! I'm your Health Guardian AI.

I can help you with:
• Symptom analysis
• Health advice
• Medication information
• General wellness tips

What health concerns can I help you with today?";

/// Sent when a session ends
pub const GOODBYE_MESSAGE: &str =
    "Thank you for using Health Guardian! Stay healthy and don't hesitate to reach out anytime. 🌟";

/// Sent to the user while the brain agent works on a forwarded request
pub const ANALYZING_MESSAGE: &str =
    "🔍 I'm analyzing your symptoms with my medical knowledge base. One moment please...";

/// Fixed reply whenever an emergency phrase is detected
pub const EMERGENCY_ALERT: &str = "🚨 **EMERGENCY ALERT** 🚨

Based on your symptoms, you may be experiencing a medical emergency.

**IMMEDIATE ACTIONS:**
1. Call emergency services (911 or local emergency number) NOW
2. Do not drive yourself
3. Stay calm and sit or lie down
4. If someone is with you, inform them

⚠️ Do not wait or try to treat this yourself. Get emergency help immediately!";

/// Reply to a greeting with no symptoms in it
pub const GREETING_RESPONSE: &str = "👋 Hi there! I'm here to help with your health questions.

Tell me what you're feeling, for example \"I have a headache and a fever\", and I'll share possible causes and some practical advice.";

/// Reply to medical-sounding text that matched no symptom key
pub const MEDICAL_UNMATCHED: &str = "🤔 I need more information to provide accurate guidance.

Could you describe your symptoms in more detail? For example:
• What are you feeling? (pain, discomfort, etc.)
• Where is it located?
• When did it start?
• How severe is it (1-10)?

💡 Common symptoms I can help with: headache, fever, cough, fatigue, nausea, sore throat, dizziness, chest pain, and more.";

/// Reply to text that is neither a greeting nor medical
pub const UNRELATED_RESPONSE: &str = "I'm here to help with your health concerns. Could you provide more details?

For example:
• What symptoms are you experiencing?
• When did they start?
• How severe are they?

💡 The more information you provide, the better I can assist you!";

/// Title line of a symptom analysis
pub const ANALYSIS_TITLE: &str = "🏥 **Medical Analysis**";

/// Banner shown under the title when a knowledge graph is loaded
pub const GRAPH_BANNER: &str = "✨ *Analysis powered by the medical knowledge graph*";

/// Appended once after all matched entries
pub const DISCLAIMER: &str = "---

**Important Disclaimer:**
This is general health information and not a substitute for professional medical advice. Always consult with a qualified healthcare provider for diagnosis and treatment.

🆘 **Seek immediate emergency care if you experience:**
• Chest pain or pressure
• Difficulty breathing
• Severe bleeding
• Loss of consciousness
• Severe allergic reaction
• Stroke symptoms (FAST: Face drooping, Arm weakness, Speech difficulty, Time to call 911)
";
