//! Sample dashboard data.
//!
//! The fixed figures the dashboard shows before any service data exists. The
//! store seeds them into empty tables and the client's synthetic source serves
//! them directly. Monthly CBAM and membership series are drawn fresh from the
//! generators in [`crate::trends`].

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;
use serde_json::{json, Value};

use crate::alert::{AlertKind, NewAlert};
use crate::carbon::NewCarbonData;
use crate::catalog::{NewInfrastructureMetric, NewPolicyEffect};
use crate::document::Document;
use crate::error::{DashboardError, Result};
use crate::global::GlobalMetricValues;
use crate::municipality::{
    CitizenParticipation, MunicipalProject, NewMunicipality, SectorEmission,
};
use crate::organization::{NewAssociationMetric, NewCorporateMetric};
use crate::trends::{esg_trend, generate_cbam_months, generate_member_months};

/// Number of daily carbon samples.
pub const SAMPLE_CARBON_DAYS: i32 = 10;

/// Platform KPIs shown on the platform view.
pub const BASELINE_GLOBAL_METRIC: GlobalMetricValues = GlobalMetricValues {
    reduction_rate: 8.7,
    active_projects: 3247,
    trading_volume: 156_432,
    platform_users: 78_934,
    data_quality: 94.2,
};

/// Ten daily samples ending yesterday, oldest first.
///
/// Values cycle through 100..500.
#[must_use]
pub fn sample_carbon_data(now: DateTime<Utc>) -> Vec<NewCarbonData> {
    (0..SAMPLE_CARBON_DAYS)
        .map(|i| {
            let value = 100.0 + f64::from((i * 137) % 400) + 0.25 * f64::from(i);
            NewCarbonData::at(value, now - Duration::days(i64::from(SAMPLE_CARBON_DAYS - i)))
        })
        .collect()
}

/// The three alerts of the platform feed, newest first.
#[must_use]
pub fn sample_alerts(now: DateTime<Utc>) -> Vec<NewAlert> {
    vec![
        NewAlert::new(
            AlertKind::Critical,
            "EU CBAM 보고 마감 임박",
            "2026년 1월 31일 연간 신고 마감 3일 전",
        )
        .created_at(now - Duration::minutes(5)),
        NewAlert::new(
            AlertKind::Warning,
            "AI 예측 엔진 부하 증가",
            "동시 예측 요청 85% 도달, 자동 스케일링 중",
        )
        .created_at(now - Duration::minutes(12)),
        NewAlert::new(
            AlertKind::Success,
            "서울시 월간 목표 달성",
            "12월 감축 목표 112% 달성 (17,890 tCO2)",
        )
        .created_at(now - Duration::hours(1)),
    ]
}

/// Policy effects for the municipal view.
#[must_use]
pub fn sample_policy_effects() -> Vec<NewPolicyEffect> {
    vec![
        NewPolicyEffect {
            name: "친환경차 구매 지원".into(),
            budget: "약 850억원".into(),
            reduction: "47,300 tCO2/년".into(),
            efficiency: "180만원/tCO2".into(),
            status: "success".into(),
            description: "전기차 구매보조금, 충전인프라 구축 등을 통해 수송부문 배출량을 연간 4.7만톤 감축했습니다.".into(),
        },
        NewPolicyEffect {
            name: "건물 에너지효율 개선".into(),
            budget: "약 1,240억원".into(),
            reduction: "89,600 tCO2/년".into(),
            efficiency: "138만원/tCO2".into(),
            status: "success".into(),
            description: "BRP(건물 리노베이션 사업)을 통해 노후 건물의 에너지효율을 평균 32% 개선했습니다.".into(),
        },
        NewPolicyEffect {
            name: "대중교통 전환 확대".into(),
            budget: "약 2,180억원".into(),
            reduction: "156,800 tCO2/년".into(),
            efficiency: "139만원/tCO2".into(),
            status: "progress".into(),
            description: "지하철 연장, 전기버스 도입, 자전거 도로 확충으로 대중교통 분담률을 68%까지 높였습니다.".into(),
        },
    ]
}

/// Seoul infrastructure capacity.
#[must_use]
pub fn sample_infrastructure_metrics() -> Vec<NewInfrastructureMetric> {
    let metric = |name: &str, value: &str, unit: &str, change: &str, description: &str| {
        NewInfrastructureMetric {
            name: name.into(),
            value: value.into(),
            unit: unit.into(),
            change: change.into(),
            description: description.into(),
        }
    };

    vec![
        metric(
            "태양광 발전",
            "673",
            "MW",
            "+84 MW vs 2023년",
            "서울시 전체 태양광 설치 용량입니다. 가정용 미니태양광, 건물일체형(BIPV), 수상태양광을 포함합니다.",
        ),
        metric(
            "전기버스",
            "1,247",
            "대",
            "전체의 15.7%",
            "서울시 시내버스 중 전기버스 비율입니다. 2026년까지 50% 전환을 목표로 하고 있습니다.",
        ),
        metric(
            "전기차 충전소",
            "4,589",
            "기",
            "이용률 71.3%",
            "급속충전 2,340기, 완속충전 2,249기로 구성됩니다. 주요 거점과 주거지역을 중심으로 배치되었습니다.",
        ),
        metric(
            "녹색건물 인증",
            "2,847",
            "동",
            "G-SEED 인증",
            "녹색건축인증(G-SEED)을 받은 건물 수입니다. 에너지 효율 등급 1등급 이상 건물이 78%를 차지합니다.",
        ),
    ]
}

fn sector(name: &str, value: f64) -> SectorEmission {
    SectorEmission {
        name: name.into(),
        value,
    }
}

fn district(name: &str, rate: f64, rank: u32) -> CitizenParticipation {
    CitizenParticipation {
        name: name.into(),
        rate,
        rank,
    }
}

fn project(name: &str, project_type: &str, reduction: &str, progress: u8) -> MunicipalProject {
    MunicipalProject {
        name: name.into(),
        project_type: project_type.into(),
        reduction: reduction.into(),
        progress,
    }
}

/// Municipality profiles. Gangwon carries a negative sink sector.
#[must_use]
pub fn sample_municipalities() -> Vec<NewMunicipality> {
    vec![
        NewMunicipality {
            name: "서울특별시".into(),
            population: 9_400_000,
            area: 605,
            carbon_emission: 45_000_000,
            reduction_target: 40.0,
            current_reduction: 25.3,
            budget: 1_200_000_000_000,
            renewable_energy_rate: 18.5,
            public_transport_rate: 65.2,
            projects: vec![
                project("공공건물 에너지효율 개선", "건물", "50,000 tCO2", 80),
                project("전기차 40만대 보급", "수송", "120,000 tCO2", 65),
                project("자원회수시설 현대화", "폐기물", "85,000 tCO2", 95),
            ],
            sector_emissions: vec![
                sector("건물", 55.2),
                sector("수송", 38.5),
                sector("폐기물", 12.8),
                sector("산업", 8.5),
            ],
            citizen_participation: vec![
                district("강남구", 82.1, 1),
                district("서초구", 80.5, 2),
                district("송파구", 79.8, 3),
                district("종로구", 75.3, 10),
                district("구로구", 72.1, 15),
            ],
        },
        NewMunicipality {
            name: "부산광역시".into(),
            population: 3_300_000,
            area: 770,
            carbon_emission: 28_000_000,
            reduction_target: 35.0,
            current_reduction: 22.1,
            budget: 800_000_000_000,
            renewable_energy_rate: 15.2,
            public_transport_rate: 55.8,
            projects: vec![
                project("부산항 탄소중립 항만 구축", "수송", "75,000 tCO2", 50),
                project("해상풍력발전단지 조성", "에너지", "150,000 tCO2", 40),
                project("스마트 상수도 시스템 도입", "물관리", "15,000 tCO2", 90),
            ],
            sector_emissions: vec![
                sector("산업", 40.1),
                sector("수송", 35.2),
                sector("건물", 18.9),
                sector("폐기물", 5.8),
            ],
            citizen_participation: vec![
                district("해운대구", 78.5, 1),
                district("부산진구", 75.1, 2),
                district("수영구", 74.9, 3),
            ],
        },
        NewMunicipality {
            name: "강원특별자치도".into(),
            population: 1_530_000,
            area: 16_874,
            carbon_emission: 18_000_000,
            reduction_target: 40.0,
            current_reduction: 30.1,
            budget: 700_000_000_000,
            renewable_energy_rate: 29.8,
            public_transport_rate: 40.5,
            projects: vec![
                project("산림 탄소흡수 증진 사업", "흡수원", "100,000 tCO2", 85),
                project("수소에너지 클러스터 구축", "에너지", "50,000 tCO2", 45),
            ],
            sector_emissions: vec![
                sector("흡수원", -20.5),
                sector("에너지", 45.1),
                sector("산업", 30.2),
                sector("수송", 15.2),
            ],
            citizen_participation: vec![
                district("춘천시", 75.8, 1),
                district("원주시", 74.2, 2),
                district("강릉시", 73.5, 3),
            ],
        },
        NewMunicipality {
            name: "제주특별자치도".into(),
            population: 670_000,
            area: 1850,
            carbon_emission: 5_000_000,
            reduction_target: 50.0,
            current_reduction: 35.8,
            budget: 500_000_000_000,
            renewable_energy_rate: 32.7,
            public_transport_rate: 45.1,
            projects: vec![
                project("CFI 2030 (Carbon Free Island)", "에너지", "150,000 tCO2", 75),
                project("전기차 충전 인프라 확대", "수송", "20,000 tCO2", 85),
                project("스마트 그리드 실증단지", "에너지", "30,000 tCO2", 90),
            ],
            sector_emissions: vec![
                sector("에너지", 45.8),
                sector("수송", 30.2),
                sector("폐기물", 15.1),
                sector("농업", 8.9),
            ],
            citizen_participation: vec![
                district("제주시", 81.2, 1),
                district("서귀포시", 78.9, 2),
            ],
        },
    ]
}


/// Corporate ESG, scope, CBAM and supplier snapshot.
///
/// `esg_scores.trend` holds the 24-month ESG trend; `cbam_data` is a fresh
/// draw of the CBAM months.
///
/// # Errors
///
/// Returns an error if a generated series cannot be encoded as a document.
pub fn sample_corporate_metric<R: Rng + ?Sized>(rng: &mut R) -> Result<NewCorporateMetric> {
    Ok(NewCorporateMetric {
        esg_scores: Document::try_from(json!({
            "overall": 78.4,
            "environmental": 81.2,
            "social": 74.1,
            "governance": 79.9,
            "trend": encode(&esg_trend())?
        }))?,
        carbon_scope: Document::try_from(json!([
            {
                "name": "Scope 1 (직접배출)",
                "value": 23450,
                "description": "사업장 연료 연소, 제조공정 등 직접 배출"
            },
            {
                "name": "Scope 2 (간접배출)",
                "value": 89360,
                "description": "구매 전력 및 스팀 사용으로 인한 간접 배출"
            },
            {
                "name": "Scope 3 (가치사슬)",
                "value": 387_240,
                "description": "원자재 조달, 제품 사용, 폐기 등 가치사슬 배출"
            }
        ]))?,
        cbam_data: Document::try_from(encode(&generate_cbam_months(rng))?)?,
        supply_chain_data: Document::try_from(json!({
            "totalSuppliers": 847,
            "assessedSuppliers": 731,
            "highRiskSuppliers": [
                {
                    "name": "대성부품",
                    "location": "중국 상하이",
                    "riskLevel": "high",
                    "esgScore": 42.3,
                    "issues": ["환경규제 위반", "근로자 안전"]
                },
                {
                    "name": "글로벌소재",
                    "location": "베트남 하노이",
                    "riskLevel": "medium",
                    "esgScore": 61.8,
                    "issues": ["탄소공시 부족"]
                }
            ]
        }))?,
    })
}

/// Association membership, regional and activity snapshot.
///
/// `member_data` is a fresh draw of the membership months.
///
/// # Errors
///
/// Returns an error if a generated series cannot be encoded as a document.
pub fn sample_association_metric<R: Rng + ?Sized>(rng: &mut R) -> Result<NewAssociationMetric> {
    Ok(NewAssociationMetric {
        member_data: Document::try_from(encode(&generate_member_months(rng))?)?,
        regional_performance: Document::try_from(json!([
            {
                "region": "서울/경기",
                "members": 1_250_000,
                "energySavingRate": 12.5,
                "recyclingRate": 85.2
            },
            {
                "region": "강원/충청",
                "members": 890_000,
                "energySavingRate": 15.2,
                "recyclingRate": 89.1
            },
            {
                "region": "전라/제주",
                "members": 780_000,
                "energySavingRate": 14.8,
                "recyclingRate": 91.3
            },
            {
                "region": "경상",
                "members": 1_150_000,
                "energySavingRate": 13.1,
                "recyclingRate": 87.5
            }
        ]))?,
        activity_utilization: Document::try_from(json!([
            {
                "name": "재활용 캠페인",
                "usage": 92.1,
                "satisfaction": 4.7,
                "participants": 1_543_000
            },
            {
                "name": "에너지 절약 교육",
                "usage": 65.4,
                "satisfaction": 4.5,
                "participants": 897_000
            },
            {
                "name": "탄소중립 실천 인증",
                "usage": 45.3,
                "satisfaction": 4.3,
                "participants": 458_000
            }
        ]))?,
    })
}

fn encode<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| DashboardError::InvalidDocument(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::trends::{CBAM_MONTHS, ESG_TREND_MONTHS, MEMBER_MONTHS};

    #[test]
    fn carbon_samples_end_yesterday_oldest_first() {
        let now = Utc::now();
        let samples = sample_carbon_data(now);

        assert_eq!(samples.len(), 10);
        assert_eq!(samples[0].recorded_at, Some(now - Duration::days(10)));
        assert_eq!(samples[9].recorded_at, Some(now - Duration::days(1)));
        assert!(samples.iter().all(|s| (100.0..500.0).contains(&s.value)));
    }

    #[test]
    fn alerts_are_newest_first() {
        let now = Utc::now();
        let kinds: Vec<_> = sample_alerts(now).iter().map(|a| a.alert_type).collect();
        assert_eq!(
            kinds,
            vec![AlertKind::Critical, AlertKind::Warning, AlertKind::Success]
        );
        assert_eq!(sample_alerts(now)[0].created_at, Some(now - Duration::minutes(5)));
    }

    #[test]
    fn municipalities_pass_validation() {
        let municipalities = sample_municipalities();
        assert_eq!(municipalities.len(), 4);
        for municipality in &municipalities {
            municipality.validate().unwrap();
        }
    }

    #[test]
    fn corporate_snapshot_embeds_generated_series() {
        let mut rng = StdRng::seed_from_u64(5);
        let metric = sample_corporate_metric(&mut rng).unwrap();

        let cbam = metric.cbam_data.as_value().as_array().unwrap();
        assert_eq!(cbam.len(), CBAM_MONTHS as usize);
        assert_eq!(cbam[0]["month"], "7월");

        let trend = metric.esg_scores.as_value()["trend"].as_array().unwrap();
        assert_eq!(trend.len(), ESG_TREND_MONTHS as usize);
        assert_eq!(metric.esg_scores.as_value()["overall"], 78.4);
    }

    #[test]
    fn association_snapshot_embeds_member_months() {
        let mut rng = StdRng::seed_from_u64(5);
        let metric = sample_association_metric(&mut rng).unwrap();

        let members = metric.member_data.as_value().as_array().unwrap();
        assert_eq!(members.len(), MEMBER_MONTHS as usize);
        assert!(members[0]["totalMembers"].as_i64().unwrap() >= 4_870_000);
        assert_eq!(
            metric.regional_performance.as_value().as_array().unwrap().len(),
            4
        );
    }
}
