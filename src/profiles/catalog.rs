use super::{Career, CareerProfile, MbtiType};

pub(super) struct SeedProfile {
    pub code: MbtiType,
    pub title: &'static str,
    pub traits: &'static [&'static str],
    pub careers: &'static [(&'static str, &'static str)],
    pub study: &'static [&'static str],
    pub activities: &'static [&'static str],
}

impl SeedProfile {
    pub fn to_profile(&self) -> CareerProfile {
        CareerProfile {
            type_code: self.code,
            display_title: self.title.to_string(),
            traits: owned(self.traits),
            careers: self
                .careers
                .iter()
                .map(|(name, glyph)| Career {
                    name: (*name).to_string(),
                    glyph: (*glyph).to_string(),
                })
                .collect(),
            study_subjects: owned(self.study),
            activities: owned(self.activities),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

pub(super) const SEED_PROFILES: &[SeedProfile] = &[
    SeedProfile {
        code: MbtiType::Intj,
        title: "INTJ – 전략가 🧠🗺️",
        traits: &["분석적", "독립적", "장기계획", "혁신 추구"],
        careers: &[
            ("데이터 과학자", "📊"),
            ("AI 연구원", "🤖"),
            ("전략 컨설턴트", "🧭"),
            ("제품 매니저(PM)", "📌"),
            ("도시/교통 계획가", "🏙️"),
        ],
        study: &["수학·통계", "컴퓨터 과학", "경제/경영", "시스템 사고"],
        activities: &["데이터 분석 프로젝트", "문제 해결 챌린지", "장기 로드맵 설계"],
    },
    SeedProfile {
        code: MbtiType::Intp,
        title: "INTP – 아이디어 메이커 🧪💡",
        traits: &["논리적", "탐구적", "호기심", "이론화"],
        careers: &[
            ("연구개발(R&D)", "🔬"),
            ("백엔드 개발자", "🧩"),
            ("알고리즘 엔지니어", "📐"),
            ("기술 분석가", "🛠️"),
            ("게임 엔진 개발자", "🎮"),
        ],
        study: &["수학·물리", "컴퓨터 과학", "논리학", "철학"],
        activities: &["과학 탐구 대회", "오픈소스 기여", "문제해결 피드"],
    },
    SeedProfile {
        code: MbtiType::Entj,
        title: "ENTJ – 지휘관 🧭👩‍✈️",
        traits: &["리더십", "목표 지향", "의사결정", "전략적"],
        careers: &[
            ("기업가/스타트업 리더", "🚀"),
            ("프로덕트 매니저", "📌"),
            ("경영 컨설턴트", "📈"),
            ("프로젝트 매니저", "📅"),
            ("세일즈 디렉터", "🤝"),
        ],
        study: &["경영/경제", "리더십", "데이터 리터러시", "프레젠테이션"],
        activities: &["모의창업", "캡스톤 프로젝트 리딩", "디베이트"],
    },
    SeedProfile {
        code: MbtiType::Entp,
        title: "ENTP – 발명가 ⚙️✨",
        traits: &["창의", "즉흥", "도전", "토론"],
        careers: &[
            ("프로덕트 디자이너", "🎨"),
            ("UX 전략가", "🧭"),
            ("혁신 컨설턴트", "🧪"),
            ("VC/스타트업 스카우트", "💼"),
            ("크리에이터/콘텐츠 기획", "🎥"),
        ],
        study: &["디자인 씽킹", "마케팅", "프로토타이핑", "스토리텔링"],
        activities: &["해커톤", "피치 데크 경진대회", "디자인 챌린지"],
    },
    SeedProfile {
        code: MbtiType::Infj,
        title: "INFJ – 옹호자 🌿🔮",
        traits: &["통찰", "가치지향", "공감", "미래지향"],
        careers: &[
            ("상담/심리", "🗣️"),
            ("교육/교사", "🏫"),
            ("사회정책 기획", "🏛️"),
            ("콘텐츠 작가", "✍️"),
            ("브랜드 스토리 전략가", "📖"),
        ],
        study: &["심리학", "교육학", "문학/철학", "사회학"],
        activities: &["봉사 프로젝트", "다큐 해석 토론", "멘토링"],
    },
    SeedProfile {
        code: MbtiType::Infp,
        title: "INFP – 이상가 🌈🕊️",
        traits: &["창의", "가치", "자율", "표현"],
        careers: &[
            ("작가/시나리오", "📚"),
            ("일러스트레이터", "🖌️"),
            ("사회적기업 기획", "🤝"),
            ("콘텐츠 마케터", "📣"),
            ("게임 스토리 디자이너", "🧙‍♂️"),
        ],
        study: &["문학", "언어", "미학", "미디어"],
        activities: &["창작 워크숍", "독서 토론", "인디 프로젝트"],
    },
    SeedProfile {
        code: MbtiType::Enfj,
        title: "ENFJ – 교사형 🌟🤗",
        traits: &["조직", "격려", "커뮤니케이션", "비전"],
        careers: &[
            ("교사/교육기획", "🏫"),
            ("HRD/러닝 디자이너", "🧩"),
            ("커뮤니티 매니저", "🫶"),
            ("PR/브랜드 커뮤니케이션", "📢"),
            ("비영리 프로젝트 리더", "🕊️"),
        ],
        study: &["교육학", "커뮤니케이션", "조직심리", "행정"],
        activities: &["캠페인 기획", "멘토링", "대외활동 리드"],
    },
    SeedProfile {
        code: MbtiType::Enfp,
        title: "ENFP – 캠페이너 🎉🚀",
        traits: &["열정", "아이디어", "관계", "도전"],
        careers: &[
            ("크리에이티브 디렉터", "🎬"),
            ("브랜드 마케터", "📣"),
            ("프로덕트 에반젤리스트", "🗯️"),
            ("행사/이벤트 기획", "🎪"),
            ("에듀테크 PM", "💡"),
        ],
        study: &["마케팅", "미디어", "교육공학", "창업"],
        activities: &["영상/음성 콘텐츠 제작", "해커톤", "홍보 캠페인"],
    },
    SeedProfile {
        code: MbtiType::Istj,
        title: "ISTJ – 관리자 🗂️🧱",
        traits: &["책임감", "정확성", "체계", "성실"],
        careers: &[
            ("회계/재무", "💼"),
            ("품질관리(QA)", "🔎"),
            ("공공행정", "🏛️"),
            ("보건/의무기록", "🩺"),
            ("인프라 엔지니어", "🖧"),
        ],
        study: &["회계", "법/행정", "데이터 관리", "통계"],
        activities: &["문서 자동화", "절차 개선 프로젝트", "감사 시뮬"],
    },
    SeedProfile {
        code: MbtiType::Isfj,
        title: "ISFJ – 수호자 🛡️🌷",
        traits: &["배려", "책임", "세심함", "협력"],
        careers: &[
            ("간호/보건", "🩺"),
            ("교무/교육행정", "📚"),
            ("서비스 운영", "🧾"),
            ("아동발달/복지", "🧸"),
            ("문서/기록 아카이브", "📁"),
        ],
        study: &["보건", "교육", "행정", "문서관리"],
        activities: &["돌봄 봉사", "행사 운영", "매뉴얼 제작"],
    },
    SeedProfile {
        code: MbtiType::Estj,
        title: "ESTJ – 실행가 🧱🚦",
        traits: &["실용", "조직", "결단", "관리"],
        careers: &[
            ("프로덕션 매니저", "🏭"),
            ("운영 관리자", "⚙️"),
            ("재무/예산 기획", "💹"),
            ("공기업/공공기관", "🏛️"),
            ("세일즈 매니저", "🧾"),
        ],
        study: &["경영", "회계", "산업공학", "프로세스"],
        activities: &["워크플로우 개선", "프로젝트 일정관리", "원가분석"],
    },
    SeedProfile {
        code: MbtiType::Esfj,
        title: "ESFJ – 사교가 🎀🤝",
        traits: &["협업", "서비스", "질서", "공감"],
        careers: &[
            ("HR/채용", "🧑‍🤝‍🧑"),
            ("고객성공(CSM)", "💟"),
            ("교육 코디네이터", "🗓️"),
            ("이벤트 운영", "🎉"),
            ("의료 코디네이터", "🏥"),
        ],
        study: &["커뮤니케이션", "조직행동", "심리", "서비스 디자인"],
        activities: &["동아리/행사 운영", "서비스 개선 설문", "멘토링"],
    },
    SeedProfile {
        code: MbtiType::Istp,
        title: "ISTP – 장인 🔧🧲",
        traits: &["분석", "손기술", "문제해결", "실험"],
        careers: &[
            ("하드웨어 엔지니어", "💡"),
            ("보안/리버스 엔지", "🛡️"),
            ("드론/로보틱스", "🚁"),
            ("메카트로닉스", "🤖"),
            ("데브옵스/사이트 신뢰성", "🖥️"),
        ],
        study: &["전자", "기계", "컴퓨터", "보안"],
        activities: &["메이커톤", "로봇 키트 제작", "IoT 실습"],
    },
    SeedProfile {
        code: MbtiType::Isfp,
        title: "ISFP – 모험가 🎨🌿",
        traits: &["감성", "유연", "미적 감각", "현재 집중"],
        careers: &[
            ("그래픽 디자이너", "🎨"),
            ("사진/영상 작가", "📷"),
            ("플로리스트/공간 스타일리스트", "💐"),
            ("패션 디자이너", "👗"),
            ("동물 보건/케어", "🐾"),
        ],
        study: &["미술", "디자인", "사진/영상", "생명과학"],
        activities: &["포트폴리오 제작", "전시회 참여", "공예 워크숍"],
    },
    SeedProfile {
        code: MbtiType::Estp,
        title: "ESTP – 활동가 🏄‍♂️⚡",
        traits: &["행동력", "현실감각", "순발력", "도전"],
        careers: &[
            ("영업/비즈니스 개발", "🤝"),
            ("응급구조/소방", "🚒"),
            ("스포츠 마케터", "🏅"),
            ("현장 엔지니어", "🦺"),
            ("창업가", "🚀"),
        ],
        study: &["체육", "경영", "공학 실습", "협상"],
        activities: &["스포츠 리그 운영", "현장 체험학습", "모의 세일즈 대회"],
    },
    SeedProfile {
        code: MbtiType::Esfp,
        title: "ESFP – 연예인 🎤🌟",
        traits: &["사교", "낙천", "표현력", "즉흥"],
        careers: &[
            ("배우/공연 예술가", "🎭"),
            ("방송 진행자/크리에이터", "🎙️"),
            ("관광/호스피탈리티", "🏨"),
            ("이벤트 MC", "🎤"),
            ("유아교육 교사", "🧸"),
        ],
        study: &["공연예술", "미디어", "관광/서비스", "유아교육"],
        activities: &["학교 축제 기획", "공연 동아리", "유튜브 채널 운영"],
    },
];
