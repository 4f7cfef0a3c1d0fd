use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The literal is the exact token the backend speaks, so serde and
/// FromStr always agree with the wire format.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

// Role tokens are authoritative as the backend stores them; the
// inconsistent casing of "admin" is the backend's, not ours.
str_enum!(UserRole {
    HealthProfessional => "Health Professional",
    Patient => "Patient",
    Admin => "admin",
});

str_enum!(Gender {
    Male => "Male",
    Female => "Female",
    Other => "Other",
});

str_enum!(PredictionStatus {
    Pending => "pending",
    Confirmed => "confirmed",
    Incorrect => "incorrect",
});

str_enum!(NotificationType {
    TestResults => "test_results",
    Appointment => "appointment",
    CriticalAlert => "critical_alert",
    Prescription => "prescription",
    PatientUpdate => "patient_update",
    TreatmentPlan => "treatment_plan",
});

str_enum!(NotificationPriority {
    Low => "low",
    Medium => "medium",
    High => "high",
    Urgent => "urgent",
});

str_enum!(RoomType {
    Lab => "lab",
    Patient => "patient",
    Surgery => "surgery",
    Icu => "icu",
    Emergency => "emergency",
    Consultation => "consultation",
});

str_enum!(RoomStatus {
    Available => "available",
    Occupied => "occupied",
    Maintenance => "maintenance",
    Cleaning => "cleaning",
    Reserved => "reserved",
});

str_enum!(AllocationStatus {
    Pending => "pending",
    Approved => "approved",
    Rejected => "rejected",
    Returned => "returned",
});

str_enum!(Theme {
    Light => "light",
    Dark => "dark",
    System => "system",
});

// Lab-entry tokens, single-letter codes as the backend validates them.
str_enum!(YesNo {
    Yes => "Y",
    No => "N",
});

str_enum!(RestingEcg {
    Normal => "Normal",
    StAbnormality => "ST",
    LeftVentricularHypertrophy => "LVH",
});

str_enum!(ChestPainType {
    TypicalAngina => "TA",
    AtypicalAngina => "ATA",
    NonAnginalPain => "NAP",
    Asymptomatic => "ASY",
});
