//! Student profile submitted through the recommendation form.

use serde::{Deserialize, Serialize};

pub const MIN_AGE: u8 = 15;
pub const MAX_AGE: u8 = 30;
pub const MIN_PRIORITY: u8 = 1;
pub const MAX_PRIORITY: u8 = 5;
const DEFAULT_PRIORITY: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "Laki-laki")]
    Male,
    #[serde(rename = "Perempuan")]
    Female,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Laki-laki",
            Gender::Female => "Perempuan",
        }
    }
}

/// Senior high school track ("Jurusan SMA").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HighSchoolTrack {
    #[serde(rename = "IPA")]
    Science,
    #[serde(rename = "IPS")]
    Social,
    #[serde(rename = "Bahasa")]
    Language,
    #[serde(rename = "Lainnya")]
    Other,
}

impl HighSchoolTrack {
    pub fn label(&self) -> &'static str {
        match self {
            HighSchoolTrack::Science => "IPA",
            HighSchoolTrack::Social => "IPS",
            HighSchoolTrack::Language => "Bahasa",
            HighSchoolTrack::Other => "Lainnya",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guardian {
    pub name: String,
    pub occupation: String,
    /// e.g. "< Rp3 juta", "Rp3-5 juta", "Rp5-10 juta", "> Rp10 juta"
    pub monthly_income: String,
}

/// How much each career aspect matters, 1 (not at all) to 5 (very).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerPriorities {
    pub high_salary: u8,
    pub job_stability: u8,
    pub work_abroad: u8,
    pub career_flexibility: u8,
    pub personal_interest: u8,
}

impl Default for CareerPriorities {
    fn default() -> Self {
        Self {
            high_salary: DEFAULT_PRIORITY,
            job_stability: DEFAULT_PRIORITY,
            work_abroad: DEFAULT_PRIORITY,
            career_flexibility: DEFAULT_PRIORITY,
            personal_interest: DEFAULT_PRIORITY,
        }
    }
}

impl CareerPriorities {
    fn labelled(&self) -> [(&'static str, u8); 5] {
        [
            ("Potensi Gaji Tinggi", self.high_salary),
            ("Stabilitas Pekerjaan", self.job_stability),
            ("Kesempatan Kerja di Luar Negeri", self.work_abroad),
            ("Fleksibilitas Karier", self.career_flexibility),
            ("Kesesuaian dengan Minat Pribadi", self.personal_interest),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    pub gender: Gender,
    pub age: u8,
    pub domicile: String,
    pub school: String,
    pub high_school_track: HighSchoolTrack,
    /// Average report-card score of the last semester, 0–100.
    pub report_average: f64,
    pub guardian: Guardian,
    #[serde(default)]
    pub favorite_subjects: Vec<String>,
    /// "Kantor", "Lapangan", "Studio Kreatif"
    pub work_environment: String,
    pub career_field: String,
    /// "Mandiri", "Tim kecil", "Tim besar"
    pub teamwork_preference: String,
    #[serde(default)]
    pub priorities: CareerPriorities,
    /// "Negeri", "Swasta", "Spesialisasi Tertentu", "Internasional"
    pub campus_type: String,
    #[serde(default)]
    pub campus_factors: Vec<String>,
}

impl StudentProfile {
    /// Returns every problem found; an empty list means the profile is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.name.trim().is_empty() {
            problems.push("name cannot be empty".to_string());
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            problems.push(format!(
                "age must be between {MIN_AGE} and {MAX_AGE}, got {}",
                self.age
            ));
        }
        if !self.report_average.is_finite() || !(0.0..=100.0).contains(&self.report_average) {
            problems.push(format!(
                "report_average must be between 0 and 100, got {}",
                self.report_average
            ));
        }
        for (label, score) in self.priorities.labelled() {
            if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&score) {
                problems.push(format!(
                    "priority '{label}' must be between {MIN_PRIORITY} and {MAX_PRIORITY}, got {score}"
                ));
            }
        }

        problems
    }

    /// One-paragraph description of the student, embedded in the prompt and
    /// shown back alongside the recommendation.
    pub fn summary(&self) -> String {
        let priorities = self
            .priorities
            .labelled()
            .iter()
            .map(|(label, score)| format!("{label}: {score}/5"))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "{name}, seorang {gender} berusia {age} tahun dari {domicile}, lulusan {school} \
             dengan jurusan {track} dan nilai rata-rata {average}. \
             Orang tua/wali, {guardian}, bekerja sebagai {occupation} dengan pendapatan {income}. \
             Minat akademiknya meliputi {subjects} dan lebih suka bekerja di {environment}. \
             Mereka ingin berkarier di bidang {career} dan lebih suka bekerja dalam {teamwork}. \
             Kampus idealnya adalah {campus_type} dengan faktor utama {factors}. \
             Dengan mempertimbangkan Prospek Karier dan Pengembangan Diri: {priorities}.",
            name = self.name.trim(),
            gender = self.gender.label(),
            age = self.age,
            domicile = self.domicile.trim(),
            school = self.school.trim(),
            track = self.high_school_track.label(),
            average = self.report_average,
            guardian = self.guardian.name.trim(),
            occupation = self.guardian.occupation.trim(),
            income = self.guardian.monthly_income.trim(),
            subjects = self.favorite_subjects.join(", "),
            environment = self.work_environment.trim(),
            career = self.career_field.trim(),
            teamwork = self.teamwork_preference.trim(),
            campus_type = self.campus_type.trim(),
            factors = self.campus_factors.join(", "),
        )
    }
}
