// Page copy and palette. Static data only.

pub struct Palette {
    pub base_bg: &'static str,
    pub base_text: &'static str,
    pub accent_bg: &'static str,
    pub light_bg: &'static str,
    pub border: &'static str,
    pub hover_bg: &'static str,
}

pub const PALETTE: Palette = Palette {
    base_bg: "bg-[#f8f6f4]",
    base_text: "text-[#4a4a4a]",
    accent_bg: "bg-[#d4c3b7]",
    light_bg: "bg-[#fdfbf9]",
    border: "border-[#e8e2dc]",
    hover_bg: "hover:bg-[#f3efe9]",
};

pub const APPLY_BUTTON_CLASS: &str = "bg-[#e24a4a] text-white px-6 py-3 rounded-full hover:bg-[#bd3535] transition duration-300 text-sm sm:text-base sm:px-8 w-fit mx-auto sm:mx-0";

pub const CONCERNS: &[&str] = &[
    "「人気サロンで技術を磨きたい」と思い入社したものの、先輩からの厳しい監視と指導で人間不信に💦",
    "「推しのライブがあるから休みたい」と言えない雰囲気。休みを申請しても「みんな我慢してるから」と却下される毎日💦",
    "「人から悪く思われたくない」という気持ちから無理をし続け、心身ともに疲弊。家庭の複雑な事情も相談できず孤独感が増す💦",
    "「もっと頑張らないと」というプレッシャーで心が休まらない。重責を任されすぎてキャパオーバーになっても弱音を吐けない日々💦",
];

pub const SOLUTIONS: &[&str] = &[
    "厳しい監視や指導はなく、平均15,000円以上の高単価サロンで安定した環境。「恩送り」の理念のもと、受けた恩を次に繋ぎ互いを認め合う文化✨",
    "「休みを申請しても却下される」ことはなく、「推しのライブには行け」は当サロンの10か条の一つ。年間3〜4回のライブ参加OK！✨",
    "無理をし続ける必要はなく、「いいところを見つけよう」という文化が根付いています。本音で話せる仲間ができる環境✨",
    "プレッシャーや重責で疲弊することなく、心理的安全性を保ち、好きな美容師という仕事をより好きになり、周りにも幸せを配れます✨",
];

pub struct Feature {
    pub mark: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub delay_ms: u32,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        mark: "①",
        title: "365日季節のお花に囲まれた、心安らぐ癒しの空間",
        body: "名古屋唯一の花屋併設美容院として、季節のお花に囲まれながら施術ができます。お花好きのお客様との自然な会話が生まれ、癒しの空間で心地よく働けます。お花に魅かれて来店されるお客様も多く、まるでお花カフェのような温かな雰囲気の中で、新しい美容師ライフをスタートできます。",
        delay_ms: 100,
    },
    Feature {
        mark: "②",
        title: "互いを認め合える、優しい仲間たち",
        body: "「誰かを批判するのではなく、いいところを見つけよう」という文化が根付いています。平均単価15,000円以上の安定した環境で、焦ることなく成長できます。新人教育も丁寧で、先輩からの過度な監視や重圧を感じることなく、安心して技術を磨けます。",
        delay_ms: 300,
    },
    Feature {
        mark: "③",
        title: "推しのために休める、充実の休暇制度",
        body: "年間3〜4回のライブ参加ok！完全週休2日制と自由休暇5日でしっかりサポート。「推しのライブには行け」は当サロンの10か条の一つです。プライベートも仕事も大切にできる、あなたの理想の働き方を実現できます。",
        delay_ms: 500,
    },
];

pub struct Slide {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const SLIDES: &[Slide] = &[
    Slide { src: "/image/gaikan.jpg", alt: "外観の様子" },
    Slide { src: "/image/naisou.jpg", alt: "店内の様子" },
];

pub const SLIDE_INTERVAL_MS: u32 = 3000;

/// A benefit card: a base photo plus overlays revealed one per delayed stage.
pub struct Benefit {
    pub title: &'static str,
    pub body: &'static str,
    pub base_image: &'static str,
    pub overlays: &'static [&'static str],
    pub delay_ms: u32,
}

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        title: "大好きな美容師がもっと楽しめるようになる",
        body: "これにより、疲弊する人間関係とはおさらば、本当の意味で信頼できる仲間に出会え生涯を通しての付き合いも。心にも余裕ができ プライベートも充実します。",
        base_image: "/image/erarerukoto.JPG",
        overlays: &["/image/erarerukoto2.jpg"],
        delay_ms: 100,
    },
    Benefit {
        title: "仕事で海外にいけるチャンスがある",
        body: "これにより、1人では中々叶えられないビジョンを会社と共叶えることができる。昨年はマレーシアでヘアメイクのお仕事をしました。今年は韓国にもお仕事で行く予定です！",
        base_image: "/image/kaigai.jpg",
        overlays: &["/image/kaigai2.jpg", "/image/kaigai3.jpg"],
        delay_ms: 200,
    },
    Benefit {
        title: "CSR(社会貢献)にも積極的なので好きな仕事で貢献できるチャンスがある",
        body: "これにより、毎日がHAPPYに！若いうちから社会貢献に触れることで人に優しく仲間想いにと、人間性が高められ波動の良い組織に入られます。",
        base_image: "/image/kouken.jpg",
        overlays: &["/image/kouken2.jpg", "/image/kouken3.jpg"],
        delay_ms: 300,
    },
];

pub const SCHEDULE: &[(&str, &str)] = &[
    ("9:00", "出勤＆朝練（朝練を推奨しています）"),
    ("9:30", "掃除＆お花の水替え"),
    ("10:00", "営業開始"),
    ("12:00", "本日2人目のお客様（カットカラートリートメント２時間施術）"),
    ("14:00", "お昼ご飯（随時順番に）"),
    ("16:00", "おやつタイム（各店舗おやつボックスがある）"),
    ("18:30", "早番帰りの掃除"),
    ("19:00", "退勤"),
];

pub struct StaffProfile {
    pub image: &'static str,
    pub name: &'static str,
    pub position: &'static str,
    pub message: &'static str,
    pub video_url: Option<&'static str>,
    pub instagram_url: Option<&'static str>,
}

pub const STAFF: &[StaffProfile] = &[StaffProfile {
    image: "/image/aoi.jpg",
    name: "あおい",
    position: "入社4年目 / スタイリスト",
    message: "",
    video_url: Some("/sutahhu.MP4"),
    instagram_url: None,
}];

/// Row content of the job listing: plain text or a list of lines.
pub enum ListingBody {
    Text(&'static str),
    Lines(&'static [&'static str]),
    Salary,
}

pub const JOB_LISTING: &[(&str, ListingBody)] = &[
    ("勤務地", ListingBody::Text("愛知県名古屋市中区丸の内2-19-19丸の内ヒルズ3F")),
    ("募集職種", ListingBody::Text("スタイリスト")),
    ("募集形態", ListingBody::Text("正社員、時短社員、パート")),
    ("給与", ListingBody::Salary),
    (
        "休日",
        ListingBody::Lines(&[
            "完全週休2日",
            "夏季休暇2日",
            "自由休暇5日(11日)",
            "年末年始5日",
            "半休2日(有給1日)",
            "土日休みあり",
        ]),
    ),
    (
        "待遇",
        ListingBody::Lines(&[
            "推し活応援",
            "早番＆遅番制度あり",
            "時短勤務あり",
            "交通費15,000円まで支給 ※店舗により車通勤サポートあり",
            "自転車通勤5,000円支給",
            "住宅手当10,000円支給",
            "役職手当10,000円支給",
            "子供手当あり（0-6歳：10,000円、7-15歳：5,000円）",
            "フリー入客も歩合率45%～",
            "アイリスト兼任/歩合率10%",
            "ブライダル事業あり",
            "託児所付き/子供を預けて働ける",
            "ヘアスク導入サロン",
            "講習手当/半額支給",
            "予約状況で早上がり有り",
            "夜練ナシ朝練推奨/営業内に講習",
            "全席iPad完備/フルフラットユメスイー",
        ]),
    ),
    ("福利厚生", ListingBody::Text("社会保険完備（健康保険/厚生年金/雇用保険/労災）")),
];

pub const SHORT_HOURS_PAY: &[(&str, &[&str])] = &[
    ("2時間時短：", &["215,000円×6/8＝161,250円", "230,000円×6/8＝172,500円"]),
    ("3時間時短：", &["215,000円×5/8＝134,375円", "230,000円×5/8＝143,750円"]),
];

pub const REQUIREMENTS: &[(&str, &str)] = &[
    (
        "家族との時間を大切にしながらキャリアを築きたい方",
        "自社託児所完備・時短勤務OK・働く時間を選べる環境で、子育てと両立したい方",
    ),
    (
        "花に囲まれた癒しの空間で高単価サロンを目指したい方",
        "名古屋唯一の花屋併設美容院で、平均単価¥15,000の高生産性を実現したい方",
    ),
    (
        "早期スタイリストデビューと多彩なキャリアを望む方",
        "1-2年以内の確実なスタイリストデビューと、アイリスト・ブライダル事業など複数のスキルを身につけたい方",
    ),
    (
        "会社からの手厚いサポートで売上アップを目指したい方",
        "最高レベルの集客サポートで、月200-300万円の売上実績を持つスタイリストから成功の秘訣を学びたい方",
    ),
    (
        "自分のアイデアや「やりたい」を形にできる環境を求める方",
        "ネイル・エステ事業など新しい挑戦を応援する、みんなの「やりたい」を形にする会社で働きたい方",
    ),
];

pub const QA: &[(&str, &str)] = &[
    (
        "スタッフの年齢はどのくらいですか？",
        "店舗によってもかわりますが平均年齢25歳くらいの若い層が活躍しているサロンです。みんな仲良く推し活頑張ってます！",
    ),
    (
        "お客様の年齢層は？",
        "20-30代がメイン層になります！カラー好きなスタッフが多くカラー比率は70%以上！髪質改善などのケア系カラーはもちろんですがデザインカラーも豊富です！",
    ),
    (
        "採用までの流れはどんな感じですか？",
        "まずサロン見学に来て下さい！オーナーの永田が1人ずつしっかりお話しさせて頂きます。会社の考え方、理念などにしっかり共感できる方のみ採用させて頂きます。",
    ),
];

/// Stagger between consecutive Q&A items.
pub const QA_STAGGER_MS: u32 = 150;

pub const OWNER_MESSAGE: &[&str] = &[
    "皆さま、こんにちは。名古屋で「mallow」「re'll」「mallow eve」の3店舗を運営しております、オーナーの永田です。この度は、私たちのサロンにご興味を持っていただき、ありがとうございます。 私たちのサロンは、ただの美容院ではなく、スタッフ一人ひとりの「なりたい」「やりたい」を叶えられる場所でありたいと考えています。ここでは、お客様に最高の美容体験を提供することはもちろんですが、スタッフが自分らしく、そして充実した仕事をしていける環境を整えることを何より大切にしています。",
    "「美容師として技術を磨きたい」「もっとクリエイティブな仕事がしたい」「ライフスタイルに合わせた働き方がしたい」「美容師以外にも興味がある」 そんな思いを持った方にこそ、私たちのサロンはぴったりの場所だと自負しています。私たちは、スタッフ一人ひとりの成長を全力でサポートし、それぞれが持つ個性を活かして活躍できる環境を提供します。",
    "また、働き方についても、柔軟な選択肢を大切にしています。フルタイム勤務だけでなく、時短勤務やパートタイム、託児所(mallow kids)を併設しているので、お子さんを預けて働くこともできます！ スタッフが自分のペースで働き、仕事とプライベートのバランスを取りながら、キャリアを築いていける環境を整えているので、どんな希望にも柔軟に対応できるように努めています。",
    "さらに、当サロンでは技術だけではなく、人間力の向上も大切にしています。お客様に感動を与える美容師であり続けるために、日々学びながら成長できるチャンスがあります。 例えば、定期的な勉強会やワークショップ、そしてスタッフ同士での交流を通じて、技術だけでなく、サロン内でのコミュニケーション力やチームワークも高めていきます。",
    "私たちのサロンで働くということは、美容師としてだけでなく、一人の人間としても成長できるチャンスに満ちています。あなたの「なりたい自分」を実現し、共に成長していける場所がここにあります。 もし、少しでも興味を持っていただけたのであれば、ぜひ一度、サロンに足を運んでいただければと思います。お話を聞かせていただき、あなたが持つビジョンや目標にどう応えていけるか、一緒に考えていきたいと考えています。",
];

pub const STORE_ADDRESS: &str = "〒460-0002 愛知県名古屋市中区丸の内2-19-19丸の内ヒルズ3F";
pub const STORE_PHONE: &str = "052-253-8467";
pub const STORE_HOURS: &[&str] = &["※最終受付時間となります。", "【火～土】10:00～20:00", "【日】10:00～18:00"];
pub const STORE_CLOSED: &str = "月曜日";
