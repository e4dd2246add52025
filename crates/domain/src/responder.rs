//! Rule-based responder: classifies free text into a topic with a fixed,
//! ordered keyword table and returns a canned bilingual reply.
//!
//! Rules are evaluated top to bottom against the lowercased input and the
//! first rule with any matching keyword wins:
//!
//! 1. [`Topic::Domicile`]
//! 2. [`Topic::Nadra`]
//! 3. [`Topic::Passport`]
//! 4. [`Topic::Hospital`]
//!
//! Input matching none of them gets the fallback reply. No state is kept
//! between calls.

use chrono::Weekday;
use serde::Serialize;

use crate::language::Bilingual;

/// Subject a message was classified under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Domicile,
    Nadra,
    Passport,
    Hospital,
}

/// External link offered alongside a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const PAK_ID: ActionLink = ActionLink {
    label: "Pak-ID",
    url: "https://id.nadra.gov.pk/",
};

pub const PASSPORT_FEE_APP: ActionLink = ActionLink {
    label: "Fee App",
    url: "https://onlinelpp.dgip.gov.pk/",
};

/// Responder output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// `None` for the fallback reply.
    pub topic: Option<Topic>,
    pub text: Bilingual,
    pub actions: Vec<ActionLink>,
}

/// One row of the decision table.
#[derive(Debug)]
pub struct Rule {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
}

impl Rule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Decision table in precedence order.
pub const RULES: &[Rule] = &[
    Rule {
        topic: Topic::Domicile,
        keywords: &["domicile", "ڈومیسائل"],
    },
    Rule {
        topic: Topic::Nadra,
        keywords: &["nadra", "cnic", "نادرا"],
    },
    Rule {
        topic: Topic::Passport,
        keywords: &["passport", "پاسپورٹ"],
    },
    Rule {
        topic: Topic::Hospital,
        keywords: &["hospital", "opd", "ہسپتال"],
    },
];

/// Keywords that switch the NADRA reply to the lost-card variant.
const LOST_KEYWORDS: &[&str] = &["lost", "گم"];

/// First topic whose rule matches `input`.
#[must_use]
pub fn classify(input: &str) -> Option<Topic> {
    let lowered = input.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.topic)
}

/// Produce the reply for `input`. `weekday` is the current day in Karachi;
/// hospital OPD hours are shorter on Fridays.
#[must_use]
pub fn respond(input: &str, weekday: Weekday) -> Reply {
    let lowered = input.to_lowercase();
    let Some(topic) = classify(&lowered) else {
        return fallback();
    };

    let (text, actions) = match topic {
        Topic::Domicile => (
            Bilingual::new(
                "DOMICILE (Karachi): Managed by Sindh Govt. IMPORTANT: Karachi is district-based. Please use the 'District Finder' tool on the Domicile page to find your specific DC Office. You will need: Form P/D, 2 Karachi utility bills (K-Electric/SSGC), and Police verification.",
                "ڈومیسائل (کراچی): سندھ حکومت کے تحت ہے۔ اہم: کراچی اضلاع میں منقسم ہے۔ اپنے متعلقہ ڈی سی آفس کو تلاش کرنے کے لیے ڈومیسائل پیج پر 'District Finder' ٹول استعمال کریں۔ آپ کو فارم P/D، کراچی کے 2 بل (کے الیکٹرک/ایس ایس جی سی)، اور پولیس تصدیق کی ضرورت ہو گی۔",
            ),
            Vec::new(),
        ),
        Topic::Nadra if LOST_KEYWORDS.iter().any(|k| lowered.contains(k)) => (
            Bilingual::new(
                "LOST CNIC: No FIR needed. Visit NADRA with your old CNIC number for fingerprints.",
                "گمشدہ کارڈ: ایف آئی آر کی ضرورت نہیں۔ پرانا نمبر لے کر نادرا جائیں اور فنگر پرنٹس دیں۔",
            ),
            vec![PAK_ID],
        ),
        Topic::Nadra => (
            Bilingual::new(
                "NADRA: Bring original documents. Use 'Pak ID' app for renewals to avoid lines.",
                "نادرا: اصل دستاویزات لائیں۔ لائنوں سے بچنے کے لیے 'Pak ID' ایپ استعمال کریں۔",
            ),
            vec![PAK_ID],
        ),
        Topic::Passport => (
            Bilingual::new(
                "PASSPORT: Pay via 'Passport Fee Asaan' App first. Visit with CNIC at 8:00 AM.",
                "پاسپورٹ: پہلے ایپ سے فیس بھریں۔ صبح 8 بجے اصل شناختی کارڈ کے ساتھ دفتر پہنچیں۔",
            ),
            vec![PASSPORT_FEE_APP],
        ),
        Topic::Hospital => {
            let hours = opd_hours(weekday);
            (
                Bilingual::new(
                    format!(
                        "HOSPITAL: OPD is open {hours}. For surgeries, use Sehat Card (SMS CNIC to 8500)."
                    ),
                    format!(
                        "ہسپتال: او پی ڈی {hours} تک ہے۔ علاج کے لیے صحت کارڈ استعمال کریں (8500 پر ایس ایم ایس کریں)۔"
                    ),
                ),
                Vec::new(),
            )
        }
    };

    Reply {
        topic: Some(topic),
        text,
        actions,
    }
}

/// Government OPD hours for `weekday`.
#[must_use]
pub fn opd_hours(weekday: Weekday) -> &'static str {
    if weekday == Weekday::Fri {
        "8 AM - 1 PM"
    } else {
        "8 AM - 3 PM"
    }
}

fn fallback() -> Reply {
    Reply {
        topic: None,
        text: Bilingual::new(
            "I can help with NADRA, Passports, and Hospital SOPs. What do you need?",
            "میں نادرا، پاسپورٹ اور ہسپتال کے بارے میں بتا سکتا ہوں۔ آپ کو کیا معلومات چاہیے؟",
        ),
        actions: Vec::new(),
    }
}
