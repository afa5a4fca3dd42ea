//! Seed dataset for the demo clinic.
//!
//! These collections mirror what a backend would serve; the record
//! store is preloaded with them when the persistence collaborator is
//! disabled, and the tests use them as shared fixtures.

use std::collections::HashMap;

use jiff::civil::{date, time};

use crate::models::{
    Appointment, AppointmentStatus, ChartEntry, Invoice, InvoiceStatus, Patient, Payment,
    PaymentMethod, Staff, Treatment, TreatmentCategory,
};

pub fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "A001".into(),
            patient_id: "P001".into(),
            patient_name: "Sarah Johnson".into(),
            section: "Women's Section".into(),
            treatment: "Dental Cleaning".into(),
            doctor_id: Some("D001".into()),
            doctor_name: "Dr. ALAN FAHMI".into(),
            date: date(2023, 4, 6),
            time: time(9, 0, 0, 0),
            status: AppointmentStatus::Confirmed,
            notes: "Regular cleaning.".into(),
        },
        Appointment {
            id: "A002".into(),
            patient_id: "P002".into(),
            patient_name: "Michael Brown".into(),
            section: "Men's Section".into(),
            treatment: "Root Canal".into(),
            doctor_id: Some("D002".into()),
            doctor_name: "Dr. ALI ENZAR".into(),
            date: date(2023, 4, 6),
            time: time(10, 30, 0, 0),
            status: AppointmentStatus::Confirmed,
            notes: "Pain in molar.".into(),
        },
        Appointment {
            id: "A003".into(),
            patient_id: "P003".into(),
            patient_name: "Emily Davis".into(),
            section: "Women's Section".into(),
            treatment: "Consultation".into(),
            doctor_id: Some("D003".into()),
            doctor_name: "Dr. MUHAMMAD ENZAR".into(),
            date: date(2023, 4, 6),
            time: time(11, 45, 0, 0),
            status: AppointmentStatus::Pending,
            notes: String::new(),
        },
        Appointment {
            id: "A004".into(),
            patient_id: "P004".into(),
            patient_name: "Robert Wilson".into(),
            section: "Men's Section".into(),
            treatment: "Tooth Extraction".into(),
            doctor_id: Some("D004".into()),
            doctor_name: "Dr. ALI RAJO".into(),
            date: date(2023, 4, 6),
            time: time(14, 15, 0, 0),
            status: AppointmentStatus::Confirmed,
            notes: "Problematic wisdom tooth.".into(),
        },
        Appointment {
            id: "A005".into(),
            patient_id: "P005".into(),
            patient_name: "Jennifer Lee".into(),
            section: "Women's Section".into(),
            treatment: "Teeth Whitening".into(),
            doctor_id: Some("D005".into()),
            doctor_name: "Dr. ALAND RAED".into(),
            date: date(2023, 4, 7),
            time: time(10, 0, 0, 0),
            status: AppointmentStatus::Confirmed,
            notes: String::new(),
        },
        Appointment {
            id: "A006".into(),
            patient_id: "P001".into(),
            patient_name: "Sarah Johnson".into(),
            section: "Women's Section".into(),
            treatment: "Follow-up".into(),
            doctor_id: Some("D001".into()),
            doctor_name: "Dr. ALAN FAHMI".into(),
            date: date(2023, 4, 15),
            time: time(11, 0, 0, 0),
            status: AppointmentStatus::Pending,
            notes: String::new(),
        },
        Appointment {
            id: "A007".into(),
            patient_id: "P002".into(),
            patient_name: "Michael Brown".into(),
            section: "Men's Section".into(),
            treatment: "Check-up".into(),
            doctor_id: Some("D002".into()),
            doctor_name: "Dr. ALI ENZAR".into(),
            date: date(2023, 5, 1),
            time: time(9, 30, 0, 0),
            status: AppointmentStatus::Confirmed,
            notes: "6-month check-up.".into(),
        },
        Appointment {
            id: "A008".into(),
            patient_id: "P001".into(),
            patient_name: "Sarah Johnson".into(),
            section: "Women's Section".into(),
            treatment: "Dental Cleaning".into(),
            doctor_id: Some("D001".into()),
            doctor_name: "Dr. ALAN FAHMI".into(),
            date: date(2024, 7, 25),
            time: time(9, 0, 0, 0),
            status: AppointmentStatus::Confirmed,
            notes: "Regular cleaning.".into(),
        },
        Appointment {
            id: "A009".into(),
            patient_id: "P002".into(),
            patient_name: "Michael Brown".into(),
            section: "Men's Section".into(),
            treatment: "Root Canal".into(),
            doctor_id: Some("D002".into()),
            doctor_name: "Dr. ALI ENZAR".into(),
            date: date(2024, 7, 25),
            time: time(10, 0, 0, 0),
            status: AppointmentStatus::Pending,
            notes: String::new(),
        },
    ]
}

pub fn patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "P001".into(),
            name: "Sarah Johnson".into(),
            age: 35,
            gender: "Female".into(),
            phone: "(555) 123-4567".into(),
            email: "sarah.j@example.com".into(),
            address: "123 Main St".into(),
            section: "Women's Section".into(),
            treatment: "Disease Treatment".into(),
            doctor_id: Some("D001".into()),
            medical_history: "None.".into(),
            last_visit: Some(date(2023, 4, 15)),
        },
        Patient {
            id: "P002".into(),
            name: "Michael Brown".into(),
            age: 42,
            gender: "Male".into(),
            phone: "(555) 234-5678".into(),
            email: "mike.b@example.com".into(),
            address: "456 Oak Ave".into(),
            section: "Men's Section".into(),
            treatment: "Disease Treatment".into(),
            doctor_id: Some("D002".into()),
            medical_history: "Allergic to Penicillin.".into(),
            last_visit: Some(date(2023, 5, 1)),
        },
        Patient {
            id: "P003".into(),
            name: "Emily Davis".into(),
            age: 28,
            gender: "Female".into(),
            phone: "(555) 345-6789".into(),
            email: "emily.d@example.com".into(),
            address: "789 Pine Ln".into(),
            section: "Women's Section".into(),
            treatment: "Cosmetic Treatment".into(),
            doctor_id: Some("D003".into()),
            medical_history: "Sensitive gums.".into(),
            last_visit: Some(date(2023, 3, 22)),
        },
        Patient {
            id: "P004".into(),
            name: "Robert Wilson".into(),
            age: 45,
            gender: "Male".into(),
            phone: "(555) 456-7890".into(),
            email: "robert.w@example.com".into(),
            address: "101 Maple Rd".into(),
            section: "Men's Section".into(),
            treatment: "Disease Treatment".into(),
            doctor_id: None,
            medical_history: "Past tooth removal.".into(),
            last_visit: Some(date(2023, 4, 6)),
        },
        Patient {
            id: "P005".into(),
            name: "Jennifer Lee".into(),
            age: 32,
            gender: "Female".into(),
            phone: "(555) 567-8901".into(),
            email: "jen.l@example.com".into(),
            address: "222 Elm Ct".into(),
            section: "Women's Section".into(),
            treatment: "Cosmetic Treatment".into(),
            doctor_id: Some("D005".into()),
            medical_history: "None.".into(),
            last_visit: Some(date(2023, 4, 7)),
        },
    ]
}

pub fn staff() -> Vec<Staff> {
    vec![
        Staff {
            id: "D001".into(),
            name: "Dr. ALAN FAHMI".into(),
            role: "Dentist".into(),
            email: "alan.fahmi@alandental.com".into(),
            phone: "+1 (555) 123-4567".into(),
            specialty: "General Dentistry".into(),
            address: "123 Dental Ave".into(),
            image_url: Some("https://placehold.co/100x100/7b68ee/ffffff".into()),
            is_demo_user: true,
        },
        Staff {
            id: "D002".into(),
            name: "Dr. ALI ENZAR".into(),
            role: "Endodontist".into(),
            email: "ali.enzar@alandental.com".into(),
            phone: "+1 (555) 234-5678".into(),
            specialty: "Root Canal Specialist".into(),
            address: "456 Dental Blvd".into(),
            image_url: Some("https://placehold.co/100x100/2ecc71/ffffff".into()),
            is_demo_user: false,
        },
        Staff {
            id: "D003".into(),
            name: "Dr. MUHAMMAD ENZAR".into(),
            role: "Orthodontist".into(),
            email: "muhammad.enzar@alandental.com".into(),
            phone: "+1 (555) 345-6789".into(),
            specialty: "Braces Specialist".into(),
            address: "789 Ortho Way".into(),
            image_url: Some("https://placehold.co/100x100/f39c12/ffffff".into()),
            is_demo_user: true,
        },
        Staff {
            id: "D004".into(),
            name: "Dr. ALI RAJO".into(),
            role: "Oral Surgeon".into(),
            email: "ali.rajo@alandental.com".into(),
            phone: "+1 (555) 456-7890".into(),
            specialty: "Extraction Specialist".into(),
            address: "101 Surgery Cir".into(),
            image_url: Some("https://placehold.co/100x100/3498db/ffffff".into()),
            is_demo_user: false,
        },
        Staff {
            id: "D005".into(),
            name: "Dr. ALAND RAED".into(),
            role: "Dentist".into(),
            email: "aland.raed@alandental.com".into(),
            phone: "+1 (555) 678-9012".into(),
            specialty: "Cosmetic Dentistry".into(),
            address: "222 Veneer View".into(),
            image_url: Some("https://placehold.co/100x100/1abc9c/ffffff".into()),
            is_demo_user: false,
        },
    ]
}

pub fn treatments() -> Vec<Treatment> {
    fn t(
        value: &str,
        price: f64,
        duration_minutes: u32,
        category: TreatmentCategory,
    ) -> Treatment {
        Treatment {
            value: value.into(),
            name: value.into(),
            description: None,
            price,
            duration_minutes,
            category,
        }
    }

    vec![
        t("Dental Cleaning", 150.00, 60, TreatmentCategory::Preventive),
        t("Root Canal", 850.00, 90, TreatmentCategory::Restorative),
        t("Tooth Extraction", 200.00, 45, TreatmentCategory::Surgical),
        t("Teeth Whitening", 300.00, 60, TreatmentCategory::Cosmetic),
        t("Consultation", 75.00, 30, TreatmentCategory::Diagnostic),
        t("Filling", 100.00, 45, TreatmentCategory::Restorative),
        t("Crown", 1200.00, 90, TreatmentCategory::Restorative),
        t("Bridge", 2500.00, 120, TreatmentCategory::Restorative),
        t("Implant", 3500.00, 120, TreatmentCategory::Surgical),
        t("Veneer", 900.00, 60, TreatmentCategory::Cosmetic),
    ]
}

pub fn invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: "INV001".into(),
            patient_id: "P001".into(),
            patient_name: "Sarah Johnson".into(),
            date: date(2023, 2, 15),
            treatment: "Dental Cleaning".into(),
            amount: 150.00,
            status: InvoiceStatus::Paid,
            method: Some("credit-card".into()),
            notes: String::new(),
        },
        Invoice {
            id: "INV002".into(),
            patient_id: "P002".into(),
            patient_name: "Michael Brown".into(),
            date: date(2023, 3, 10),
            treatment: "Root Canal".into(),
            amount: 850.00,
            status: InvoiceStatus::Pending,
            method: None,
            notes: "Initial visit for pain.".into(),
        },
        Invoice {
            id: "INV003".into(),
            patient_id: "P003".into(),
            patient_name: "Emily Davis".into(),
            date: date(2023, 3, 22),
            treatment: "Consultation".into(),
            amount: 75.00,
            status: InvoiceStatus::Paid,
            method: Some("cash".into()),
            notes: String::new(),
        },
        Invoice {
            id: "INV004".into(),
            patient_id: "P004".into(),
            patient_name: "Robert Wilson".into(),
            date: date(2023, 4, 5),
            treatment: "Tooth Extraction".into(),
            amount: 200.00,
            status: InvoiceStatus::Pending,
            method: None,
            notes: "Wisdom tooth #48.".into(),
        },
    ]
}

pub fn payments() -> Vec<Payment> {
    vec![
        Payment {
            id: "PMT001".into(),
            invoice_id: "INV001".into(),
            patient_id: "P001".into(),
            patient_name: "Sarah Johnson".into(),
            date: date(2023, 2, 15),
            amount: 150.00,
            method: "credit-card".into(),
        },
        Payment {
            id: "PMT002".into(),
            invoice_id: "INV003".into(),
            patient_id: "P003".into(),
            patient_name: "Emily Davis".into(),
            date: date(2023, 3, 22),
            amount: 75.00,
            method: "cash".into(),
        },
    ]
}

pub fn payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            id: "PM001".into(),
            value: "cash".into(),
            name: "Cash".into(),
            description: "Accept cash payments directly at the clinic".into(),
            icon: "fas fa-money-bill-wave".into(),
        },
        PaymentMethod {
            id: "PM002".into(),
            value: "credit-card".into(),
            name: "Credit Card".into(),
            description: "Accept Visa, MasterCard, and American Express".into(),
            icon: "far fa-credit-card".into(),
        },
        PaymentMethod {
            id: "PM003".into(),
            value: "insurance".into(),
            name: "Insurance".into(),
            description: "Process payments through dental insurance providers".into(),
            icon: "fas fa-file-medical".into(),
        },
        PaymentMethod {
            id: "PM004".into(),
            value: "online-transfer".into(),
            name: "Online Transfer".into(),
            description: "Direct bank transfer option".into(),
            icon: "fas fa-university".into(),
        },
    ]
}

pub fn charting_history() -> HashMap<String, Vec<ChartEntry>> {
    fn entry(d: jiff::civil::Date, teeth: &[&str], treatment_type: &str, notes: &str) -> ChartEntry {
        ChartEntry {
            date: d,
            teeth: teeth.iter().map(|t| t.to_string()).collect(),
            treatment_type: treatment_type.into(),
            notes: notes.into(),
        }
    }

    let mut history = HashMap::new();
    history.insert(
        "P001".to_string(),
        vec![
            entry(date(2022, 10, 15), &["16", "26"], "filling", "Mesial composite fillings"),
            entry(date(2023, 2, 10), &["36", "46"], "filling", "Distal composite fillings"),
            entry(date(2023, 3, 20), &["36"], "root-canal", "Root canal therapy on 36 due to pain"),
            entry(date(2023, 3, 25), &["36"], "crown", "Crown placed on 36 after root canal"),
        ],
    );
    history.insert(
        "P002".to_string(),
        vec![
            entry(
                date(2021, 11, 5),
                &["18", "28", "38", "48"],
                "extraction",
                "All 4 wisdom teeth extracted",
            ),
            entry(date(2022, 8, 12), &["17", "42"], "extraction", "Extraction of #17 and #42"),
            entry(
                date(2023, 1, 30),
                &["11", "21"],
                "consult-needed",
                "Evaluation for orthodontic referral",
            ),
        ],
    );
    history.insert(
        "P003".to_string(),
        vec![
            entry(date(2023, 3, 22), &["13", "23"], "veneer", "Porcelain veneers placed on upper canines"),
            entry(
                date(2023, 3, 22),
                &["12", "11", "21", "22"],
                "whitening",
                "Full mouth whitening performed after veneer placement",
            ),
        ],
    );
    history.insert(
        "P004".to_string(),
        vec![entry(
            date(2023, 4, 6),
            &["48"],
            "extraction",
            "Problematic wisdom tooth #48 extracted.",
        )],
    );
    history.insert(
        "P005".to_string(),
        vec![
            entry(
                date(2023, 4, 7),
                &[],
                "veneer",
                "Consultation regarding cosmetic treatments, focused on veneers and whitening.",
            ),
            entry(
                date(2023, 4, 7),
                &["12", "11", "21", "22"],
                "whitening",
                "Teeth whitening treatment performed on upper incisors and canines.",
            ),
        ],
    );
    history
}
