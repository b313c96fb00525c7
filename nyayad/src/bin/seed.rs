// Seed the database with example laws and summaries.

use anyhow::{Context, Result};
use dotenv::dotenv;
use nyaya_db::{Db, DbConfig};
use nyayad::storage::laws::{insert_law, NewLaw};

fn examples() -> Vec<NewLaw> {
    vec![
        NewLaw {
            title: "Unpaid Salary / Wages".into(),
            section: Some("Various".into()),
            act: Some("Payment of Wages Act / Industrial Disputes Act".into()),
            text: Some(
                "Employer not paying salary for months. Remedies include complaint to labour \
                 commissioner, conciliation, and claim under Industrial Disputes Act."
                    .into(),
            ),
            summary_en: Some(
                "If your employer has not paid salary, you can file a complaint with the Labour \
                 Commissioner, collect pay slips and bank statements, and approach labour court \
                 or labour commissioner for recovery. Consider statutory claims under Payment of \
                 Wages Act and Industrial Disputes Act."
                    .into(),
            ),
            summary_hi: Some(
                "यदि नियोक्ता वेतन नहीं दे रहा है, तो आप श्रम आयुक्त को शिकायत दर्ज कर सकते हैं...".into(),
            ),
            summary_mr: Some(
                "जर नोकरीदार पगार देत नसेल तर तुम्ही श्रम आयुक्त कडे तक्रार करू शकता...".into(),
            ),
        },
        NewLaw {
            title: "Landlord not returning deposit".into(),
            section: Some("Rent/Tenancy".into()),
            act: Some("Rent Control / Agreement Law".into()),
            text: Some(
                "Landlord refuses to return security deposit after tenancy ends. Possible \
                 remedies: demand notice, consumer forum, civil suit for recovery."
                    .into(),
            ),
            summary_en: Some(
                "If landlord refuses to return deposit, serve a written demand, keep records, \
                 and file a claim in consumer court or civil suit for recovery. Check local rent \
                 control laws for caps on security deposit."
                    .into(),
            ),
            summary_hi: Some("यदि मकानमालिक जमा राशि वापस नहीं कर रहा है, तो लिखित नोटिस दें...".into()),
            summary_mr: Some("जर भाडेकरूचा ठेवीचा पैसा परत नसेल तर लेखी मागणी करा...".into()),
        },
        NewLaw {
            title: "Consumer product defect / refund".into(),
            section: Some("Consumer Protection".into()),
            act: Some("Consumer Protection Act".into()),
            text: Some(
                "Defective product or service; seller refuses refund/replacement. Remedies \
                 include complaint to consumer forum with invoice, warranty, and communication \
                 record."
                    .into(),
            ),
            summary_en: Some(
                "For defective goods, approach the seller first, then file complaint in the \
                 Consumer Forum with invoice, warranty, and proof of defect. You can claim \
                 replacement, refund, or compensation."
                    .into(),
            ),
            summary_hi: Some("खराब उत्पाद मिलने पर पहले विक्रेता से संपर्क करें...".into()),
            summary_mr: Some("खराब वस्तू मिळाल्यास विक्रेत्याशी संपर्क करा...".into()),
        },
        NewLaw {
            title: "Domestic violence / protection".into(),
            section: Some("Family Law".into()),
            act: Some("Protection of Women from Domestic Violence Act, 2005".into()),
            text: Some(
                "Physical, emotional or economic abuse by a partner or family member. Remedies \
                 include protection orders, maintenance, and police complaint."
                    .into(),
            ),
            summary_en: Some(
                "If facing domestic violence, you can approach the police, file for protection \
                 orders and maintenance under the Domestic Violence Act, and seek shelter \
                 services. Keep records and medical reports."
                    .into(),
            ),
            summary_hi: Some("घरेलू हिंसा का सामना कर रहे हैं तो पुलिस से संपर्क करें...".into()),
            summary_mr: Some("घरेलू हिंसेला सामोरे जात असाल तर पोलिसांना कळवा...".into()),
        },
        NewLaw {
            title: "FIR / Criminal complaint basics".into(),
            section: Some("Criminal Procedure".into()),
            act: Some("Indian Penal Code / CrPC (overview)".into()),
            text: Some(
                "How to file FIR, evidence collection, and victims rights. If police refuses, \
                 file complaint with higher officer or approach magistrate for directions."
                    .into(),
            ),
            summary_en: Some(
                "To file an FIR, go to the police station and provide a written complaint. Keep \
                 a copy of the FIR. If police refuse, approach the Superintendent of Police or \
                 file a private complaint before a magistrate."
                    .into(),
            ),
            summary_hi: Some("एफआईआर दर्ज कराने के लिए थाने जाएं...".into()),
            summary_mr: Some("एफआयआर नोंदवण्यासाठी स्थानकाला जा...".into()),
        },
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let mut cfg = DbConfig::from_env();
    // Seeding always creates the schema.
    cfg.migrate_on_start = true;
    eprintln!("[seed] database url: {}", cfg.database_url);

    let db = Db::new(cfg);
    db.init().await.with_context(|| "database init failed")?;
    let pool = db
        .get_pool()
        .await
        .with_context(|| "database pool acquisition failed")?;

    let mut inserted = 0usize;
    for law in examples() {
        let id = insert_law(pool, &law)
            .await
            .with_context(|| format!("inserting {:?}", law.title))?;
        eprintln!("[seed] id={} {}", id, law.title);
        inserted += 1;
    }
    println!("Seeded DB with {} example laws.", inserted);
    Ok(())
}
