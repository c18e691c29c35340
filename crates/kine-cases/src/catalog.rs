use std::sync::LazyLock;

use kine_core::labels::{
    DUTY_CYCLE_20, DUTY_CYCLE_CONTINUOUS, METHOD_CAPACITIVE, METHOD_INDUCTIVE, POLARITY_NORMAL,
    US_1_MHZ, US_3_MHZ, VECTOR_6_6,
};
use kine_core::models::case::ClinicalCase;
use kine_core::models::device::{Device, DeviceKey, FaradicVariant};
use kine_core::models::rules::{
    FaradicRules, InfraredRules, InterferentialRules, RuleSet, RussianRules, ShortwaveRules,
    TensRules, UltrasoundRules,
};

use crate::builder::{string_set, CaseBuilder};

pub const PLACEHOLDER_CASE_ID: &str = "seleccionar-caso";

pub(crate) static CASES: LazyLock<Vec<ClinicalCase>> = LazyLock::new(|| {
    vec![
        CaseBuilder::new(
            PLACEHOLDER_CASE_ID,
            "Seleccionar Caso...",
            "Por favor, selecciona un caso clínico para comenzar la simulación.",
        )
        .build(),
        CaseBuilder::new(
            "01-ruptura-lca",
            "Ruptura LCA (Debilidad M3)",
            "Paciente de 24 años, deportista, 6ta semana postop LCA. Debilidad en extensores \
             de rodilla por desuso (M3).",
        )
        .accept(Device::Russian, strengthening_russian())
        .accept(
            Device::Interferential,
            RuleSet::Interferential(InterferentialRules {
                carrier_min: Some(2000.0),
                carrier_max: Some(2500.0),
                amf_min: Some(20.0),
                ..Default::default()
            }),
        )
        .accept(Device::Tens, strengthening_tens())
        .objectives(&["fortalec", "tetaniz", "fuerza", "atrofia"])
        .build(),
        CaseBuilder::new(
            "02-esguince-tobillo-agudo",
            "Esguince Tobillo Agudo (24h)",
            "Paciente de 19 años, esguince hace 24 hrs. Edema en zona articular y dolor \
             intenso (EVA 8/10).",
        )
        .accept(Device::Interferential, analgesic_interferential(true))
        .accept(
            Device::Tens,
            RuleSet::Tens(TensRules {
                freq_min: Some(50.0),
                duration_max: Some(150.0),
                ..Default::default()
            }),
        )
        .accept(
            faradic(FaradicVariant::Trabert),
            RuleSet::Faradic(FaradicRules {
                polarity: Some(POLARITY_NORMAL.to_string()),
                ..Default::default()
            }),
        )
        .objectives(&["analgesia", "edema", "gate control", "drenaje"])
        .build(),
        CaseBuilder::new(
            "03-denervacion-radial",
            "Denervación Radial (M1)",
            "Paciente herido con arma blanca en brazo. Debilidad extensores muñeca (M1) y \
             parestesia. Realice prueba UGT.",
        )
        .accept(
            faradic(FaradicVariant::Triangular),
            RuleSet::Faradic(FaradicRules {
                phase_times: Some(vec![1000.0, 500.0]),
                pause_times: Some(vec![2000.0]),
                ..Default::default()
            }),
        )
        .objectives(&["ugt", "curva", "acomodacion", "triangular"])
        .build(),
        CaseBuilder::new(
            "04-lumbalgia-cronica",
            "Lumbalgia Crónica (8 meses)",
            "Paciente de 55 años, dolor lumbar sordo de 8 meses. No responde a analgésicos \
             comunes.",
        )
        .accept(
            Device::Tens,
            RuleSet::Tens(TensRules {
                freq_max: Some(10.0),
                duration_min: Some(150.0),
                ..Default::default()
            }),
        )
        .objectives(&["endorfinas", "descendente", "cronico", "analgesia", "burst"])
        .build(),
        CaseBuilder::new(
            "05-atrofia-cuadriceps",
            "Atrofia Cuádriceps (Encamado)",
            "Paciente 70 años, encamado por neumonía. Debilidad generalizada, predominio \
             cuádriceps (M2).",
        )
        .accept(Device::Russian, strengthening_russian())
        .accept(
            Device::Interferential,
            RuleSet::Interferential(InterferentialRules {
                carrier_min: Some(2000.0),
                carrier_max: Some(2500.0),
                ..Default::default()
            }),
        )
        .accept(Device::Tens, strengthening_tens())
        .objectives(&["fortalec", "tetaniz", "atrofia"])
        .build(),
        CaseBuilder::new(
            "06-edema-pantorrilla",
            "Edema Pantorrilla Post-Traumático",
            "Edema importante en gastrocnemios tras desgarro cicatrizado. Dolor 6/10.",
        )
        .accept(
            Device::Russian,
            RuleSet::Russian(RussianRules {
                burst_max: Some(10.0),
                ..Default::default()
            }),
        )
        .accept(
            Device::Interferential,
            RuleSet::Interferential(InterferentialRules {
                amf_max: Some(15.0),
                ..Default::default()
            }),
        )
        .objectives(&["bombeo", "drenaje", "edema", "fasciculacion"])
        .build(),
        CaseBuilder::new(
            "07-ulcera-talon",
            "Úlcera Talón (No cicatriza)",
            "Úlcera en talón de 3 semanas. Dolor y debilidad.",
        )
        .accept_any(Device::Microcurrent)
        .accept_any(Device::HighVoltage)
        .accept_any(Device::Tens)
        .objectives(&["cicatriz", "reparacion", "ulcera", "microcorriente"])
        .note("Se recomienda Microcorrientes (MENS) o Alto Voltaje.")
        .build(),
        CaseBuilder::new(
            "08-epicondilitis-cronica",
            "Epicondilitis Crónica (4 meses)",
            "Tenista de 40 años, dolor epicóndilo lateral de 4 meses.",
        )
        .accept(Device::Interferential, analgesic_interferential(true))
        .accept(Device::Tens, tens_freq_min(50.0))
        .objectives(&["analgesia", "dolor", "gate control"])
        .build(),
        CaseBuilder::new(
            "09-monitoreo-reinervacion",
            "Monitoreo Reinervación (Cronaxia)",
            "Post-op hernia lumbar. Dificultad para elevar talones. Comprobar Cronaxia \
             (Reobase 30mA).",
        )
        .accept(
            faradic(FaradicVariant::Rectangular),
            RuleSet::Faradic(FaradicRules {
                search_low_phase_time: Some(true),
                ..Default::default()
            }),
        )
        .objectives(&["cronaxia", "evaluacion", "diagnostico", "tiempo"])
        .build(),
        CaseBuilder::new(
            "10-dolor-postqx-meniscos",
            "Dolor Post-Qx Meniscos (Inmediato)",
            "Operado hace 6 horas. Dolor agudo (EVA 9/10).",
        )
        .accept(Device::Interferential, analgesic_interferential(true))
        .accept(
            Device::Tens,
            RuleSet::Tens(TensRules {
                freq_min: Some(80.0),
                duration_max: Some(100.0),
                ..Default::default()
            }),
        )
        .objectives(&["analgesia", "agudo", "gate control"])
        .build(),
        CaseBuilder::new(
            "11-lesion-nervio-ulnar",
            "Lesión Nervio Ulnar (Reobase)",
            "Fractura consolidada húmero. Hormigueo mano medial. Obtener Reobase.",
        )
        .accept(
            faradic(FaradicVariant::Rectangular),
            RuleSet::Faradic(FaradicRules {
                phase_times: Some(vec![1000.0, 500.0]),
                ..Default::default()
            }),
        )
        .objectives(&["reobase", "umbral", "diagnostico"])
        .build(),
        CaseBuilder::new(
            "12-tendinopatia-rotuliana",
            "Tendinopatía Rotuliana Subaguda",
            "Dolor tendón rotuliano, 3 semanas evolución. EVA 8/10.",
        )
        .accept(Device::Interferential, analgesic_interferential(false))
        .accept(Device::Tens, tens_freq_min(50.0))
        .objectives(&["analgesia", "dolor", "gate control"])
        .build(),
        CaseBuilder::new(
            "13-ulcera-sacro",
            "Úlcera Sacro (Post-op Cadera)",
            "UPP en zona sacra, 2 semanas, no cicatriza.",
        )
        .accept_any(Device::Microcurrent)
        .accept_any(Device::HighVoltage)
        .objectives(&["cicatriz", "ulcera", "reparacion"])
        .note("Requiere corrientes de reparación tisular (Microcorriente/Alto Voltaje).")
        .build(),
        CaseBuilder::new(
            "14-fractura-escafoides",
            "Fractura Escafoides (No consolidada)",
            "Fractura 4 meses, falta de consolidación.",
        )
        .accept(
            Device::Ultrasound,
            RuleSet::Ultrasound(UltrasoundRules {
                duty_cycle: Some(DUTY_CYCLE_20.to_string()),
                frequency: Some(US_1_MHZ.to_string()),
                intensity_max: Some(0.5),
            }),
        )
        .objectives(&["lipus", "consolidacion", "oseo", "fractura"])
        .build(),
        CaseBuilder::new(
            "15-acortamiento-banda-iliotibial",
            "Acortamiento Banda Iliotibial",
            "Corredora, dolor lateral rodilla. Banda tensa y acortada.",
        )
        .accept(
            Device::Shortwave,
            RuleSet::Shortwave(ShortwaveRules {
                method: Some(METHOD_CAPACITIVE.to_string()),
                dose_min_power: Some(6.0),
                ..Default::default()
            }),
        )
        .accept(Device::Infrared, infrared_distance(40.0))
        .objectives(&["calor", "termico", "elongacion", "relajacion"])
        .build(),
        CaseBuilder::new(
            "16-artritis-reumatoide-manos",
            "Artritis Reumatoide (Manos)",
            "AR larga data, rigidez matutina. Piel delgada.",
        )
        .accept(
            Device::Infrared,
            RuleSet::Infrared(InfraredRules {
                distance_min: Some(30.0),
                time_min: Some(20.0),
            }),
        )
        .objectives(&["rigidez", "dolor", "calor superficial"])
        .build(),
        CaseBuilder::new(
            "17-esguince-talofibular-anterior",
            "Esguince Talofibular Anterior (1 día)",
            "Esguince agudo hace 1 día. Dolor 4/10. Sin edema importante.",
        )
        .accept(
            Device::Ultrasound,
            RuleSet::Ultrasound(UltrasoundRules {
                duty_cycle: Some(DUTY_CYCLE_20.to_string()),
                intensity_max: Some(0.5),
                ..Default::default()
            }),
        )
        .objectives(&["reparacion", "regeneracion", "agudo", "lipus"])
        .build(),
        CaseBuilder::new(
            "18-torticolis-aguda",
            "Tortícolis Aguda",
            "Espasmo severo hace 48 hrs. Dolor trapecio/elevador.",
        )
        // Dose II
        .accept(
            Device::Shortwave,
            RuleSet::Shortwave(ShortwaveRules {
                dose_max_power: Some(15.0),
                ..Default::default()
            }),
        )
        .accept(Device::Infrared, infrared_distance(40.0))
        .objectives(&["relaja", "espasmo", "calor suave"])
        .build(),
        CaseBuilder::new(
            "19-desgarro-isquiotibial",
            "Desgarro Isquiotibial (10 días)",
            "Desgarro grado 1, hace 10 días. Sin edema.",
        )
        // Dose II
        .accept(Device::Shortwave, inductive_shortwave(8.0))
        .objectives(&["regeneracion", "flujo", "reparacion"])
        .build(),
        CaseBuilder::new(
            "20-cicatriz-adherida-muneca",
            "Cicatriz Adherida Muñeca",
            "Post fractura radio. Cicatriz fibrosa adherida.",
        )
        .accept(
            Device::Ultrasound,
            RuleSet::Ultrasound(UltrasoundRules {
                frequency: Some(US_3_MHZ.to_string()),
                duty_cycle: Some(DUTY_CYCLE_CONTINUOUS.to_string()),
                ..Default::default()
            }),
        )
        .objectives(&["adherencia", "fibrosis", "cicatriz"])
        .build(),
        CaseBuilder::new(
            "21-espasmo-dorsal-cronico",
            "Espasmo Dorsal Crónico",
            "Obrero, espasmo crónico dorsal extenso.",
        )
        // Dose III/IV
        .accept(Device::Shortwave, inductive_shortwave(30.0))
        .objectives(&["termico", "calor profundo", "relajacion"])
        .build(),
    ]
});

fn faradic(variant: FaradicVariant) -> DeviceKey {
    DeviceKey::with_variant(Device::Faradic, variant)
}

fn strengthening_russian() -> RuleSet {
    RuleSet::Russian(RussianRules {
        carrier: Some(2500.0),
        burst_min: Some(20.0),
        ratios: string_set(&["1:4", "1:5"]),
        ..Default::default()
    })
}

fn strengthening_tens() -> RuleSet {
    RuleSet::Tens(TensRules {
        freq_min: Some(20.0),
        duration_min: Some(200.0),
        ..Default::default()
    })
}

fn tens_freq_min(freq_min: f64) -> RuleSet {
    RuleSet::Tens(TensRules {
        freq_min: Some(freq_min),
        ..Default::default()
    })
}

/// 4 kHz carrier with a high AMF for gate-control analgesia.
fn analgesic_interferential(with_vector: bool) -> RuleSet {
    RuleSet::Interferential(InterferentialRules {
        carrier: Some(4000.0),
        amf_min: Some(80.0),
        vector: with_vector.then(|| VECTOR_6_6.to_string()),
        ..Default::default()
    })
}

fn infrared_distance(distance_min: f64) -> RuleSet {
    RuleSet::Infrared(InfraredRules {
        distance_min: Some(distance_min),
        ..Default::default()
    })
}

fn inductive_shortwave(dose_min_power: f64) -> RuleSet {
    RuleSet::Shortwave(ShortwaveRules {
        method: Some(METHOD_INDUCTIVE.to_string()),
        dose_min_power: Some(dose_min_power),
        ..Default::default()
    })
}
