//! Outline data for the registry patterns.
//!
//! Each shape is a list of points where the first entry is an absolute
//! anchor and every following entry is relative to that anchor. `width`
//! and `height` are the dimensions the outline was traced at, used to
//! compute the stretch ratio onto a segment box.

use super::PatternShape;

pub(super) const WHELK: PatternShape = PatternShape {
    points: &[
        [0.22100000000000364, 793.123], [79.92, -101.91], [103.64, -230.23], [61.47, -328.6],
        [91.36, -484.13], [132.64, -522.82], [132.64, -530.73], [169.55, -565.84],
        [175.71, -565.84], [264.44, -655.47], [361.13, -708.19], [415.59, -793.44],
        [492.93, -774.98], [499.94, -718.73], [558.82, -637.91], [624.73, -571.11],
        [637.91, -565.84], [673.02, -445.48], [649.29, -302.24], [594.84, -224.05],
        [552.66, -180.99], [545.65, -180.15], [504.31, -138.81], [235.44, 3.53],
        [216.99, 52.72], [181.88, -8.8], [97.53, -31.63],
    ],
    width: 673.02,
    height: 846.16,
};

pub(super) const WONDER: PatternShape = PatternShape {
    points: &[
        [318.977, -0.3160000000000025], [-59.25, 58.5], [-119.25, 123.75], [-185.25, 245.25],
        [-209.25, 287.25], [-244.5, 390.0], [-269.25, 576.0], [-276.0, 739.5],
        [-288.0, 779.25], [-318.75, 845.25], [-194.25, 836.25], [-142.5, 821.25],
        [-120.75, 804.0], [-98.25, 776.25], [-53.25, 704.25], [15.0, 615.75],
        [75.0, 537.75], [135.0, 440.25], [195.75, 333.75], [249.75, 243.75],
        [284.25, 177.0], [307.5, 144.0], [307.5, 134.25], [294.0, 121.5],
    ],
    width: 626.25,
    height: 845.25,
};

pub(super) const RAPA: PatternShape = PatternShape {
    points: &[
        [215.622, 22.551000000000002], [30.43, 12.48], [83.49, 60.09], [83.49, 91.3],
        [72.57, 120.95], [29.65, 185.72], [-35.89, 262.97], [-71.79, 355.82],
        [-88.95, 378.45], [-88.95, 480.67], [-83.49, 493.15], [-88.95, 535.29],
        [-131.87, 618.0], [-144.36, 636.73], [-161.52, 666.38], [-186.5, 726.46],
        [-209.9, 797.48], [-216.93, 810.74], [-184.93, 822.38], [-120.17, 815.42],
        [-95.98, 781.09], [-88.96, 741.29], [-66.71, 720.23], [-35.12, 640.63],
        [-17.94, 624.25], [-17.94, 593.03], [-30.43, 575.87], [7.02, 564.16],
        [32.77, 545.44], [52.28, 554.01], [62.42, 527.49], [97.54, 515.78],
        [125.63, 536.07], [125.63, 505.64], [159.96, 490.81], [191.95, 504.08],
        [187.14, 476.38], [221.61, 460.38], [252.04, 475.21], [247.36, 447.12],
        [277.79, 419.81], [301.98, 426.83], [288.71, 411.19], [319.14, 380.79],
        [344.11, 378.45], [330.44, 366.56], [354.26, 335.53], [372.99, 343.34],
        [361.28, 326.17], [372.99, 269.99], [398.74, 271.55], [378.45, 240.34],
        [379.23, 228.63], [404.2, 230.97], [381.57, 205.22], [379.23, 188.05],
        [404.2, 185.72], [373.77, 170.89], [368.3, 151.38], [386.25, 142.8],
        [362.06, 135.77], [348.02, 120.95], [360.5, 99.1], [340.21, 110.8],
        [323.05, 95.98], [330.85, 71.01], [308.22, 81.94], [296.52, 49.94],
        [263.74, 53.06], [246.58, 47.6], [244.24, 30.44], [217.7, 36.68],
        [198.98, 25.75], [197.42, 4.69], [181.81, 12.49], [161.52, 11.71],
        [131.09, 0.0], [115.49, -22.87], [100.66, -11.7],
    ],
    width: 621.12,
    height: 845.25,
};

pub(super) const TUN: PatternShape = PatternShape {
    points: &[
        [130.995, -0.3160000000000025], [27.8, 22.93], [52.02, 40.59], [66.37, 65.98],
        [66.37, 134.14], [47.53, 191.55], [10.76, 247.16], [-24.22, 282.13],
        [-52.92, 318.91], [-63.69, 339.54], [-71.75, 348.51], [-66.38, 498.29],
        [-66.38, 696.51], [-85.21, 750.32], [-97.77, 787.1], [-113.02, 807.73],
        [-119.29, 824.77], [-130.95, 839.12], [-130.95, 845.25], [-109.42, 837.32],
        [-98.66, 829.25], [-47.54, 819.39], [-32.29, 809.52], [-1.8, 786.2],
        [33.18, 754.81], [90.59, 702.79], [161.44, 622.96], [198.22, 579.91],
        [229.6, 544.93], [286.11, 447.17], [314.81, 361.06], [324.68, 296.49],
        [310.33, 194.24], [291.49, 139.53], [254.72, 101.85], [241.27, 96.48],
        [214.36, 71.36], [166.82, 47.14], [96.87, 17.55], [50.23, 4.99],
    ],
    width: 455.63,
    height: 845.25,
};

pub(super) const GALLAGHERS: PatternShape = PatternShape {
    points: &[
        [294.727, -0.0660000000000025], [-60.75, 60.0], [-95.25, 122.25], [-109.5, 163.5],
        [-138.75, 192.0], [-157.5, 237.0], [-177.0, 259.5], [-181.5, 317.25],
        [-169.5, 409.5], [-174.0, 553.5], [-194.25, 615.0], [-229.5, 648.0],
        [-243.0, 674.25], [-261.75, 717.0], [-277.5, 775.5], [-295.5, 796.5],
        [-295.5, 806.25], [-270.75, 798.0], [-219.75, 818.25], [-193.5, 840.75],
        [-177.0, 840.75], [-127.5, 787.5], [-122.25, 774.75], [-102.75, 756.75],
        [-60.0, 733.5], [-30.0, 725.25], [-17.25, 719.25], [18.75, 684.75],
        [66.0, 666.75], [83.25, 649.5], [127.5, 501.75], [143.25, 486.75],
        [143.25, 473.25], [135.75, 462.75], [162.0, 445.5], [162.0, 413.25],
        [149.25, 402.0], [150.0, 354.0], [167.25, 337.5], [167.25, 312.75],
        [155.25, 299.25], [155.25, 288.0], [167.25, 264.0], [161.25, 233.25],
        [144.75, 223.5], [117.75, 184.5], [113.25, 164.25], [97.5, 153.0],
        [75.75, 84.0], [69.0, 71.25], [48.0, 49.5], [39.75, 23.25],
        [24.0, 6.75],
    ],
    width: 462.75,
    height: 840.75,
};

pub(super) const ELOISE: PatternShape = PatternShape {
    points: &[
        [353.773, -0.09300000000001774], [18.16, 70.68], [5.19, 211.68], [-19.9, 284.34],
        [-58.82, 345.76], [-143.6, 455.62], [-226.64, 516.17], [-298.44, 586.24],
        [-323.52, 642.46], [-341.69, 658.9], [-354.66, 690.91], [-340.82, 740.55],
        [-269.03, 816.34], [-183.39, 838.83], [-141.0, 844.29], [-83.91, 826.71],
        [0.0, 780.0], [49.3, 741.72], [132.34, 639.0], [167.81, 534.34],
        [185.11, 412.37], [185.11, 359.6], [172.13, 254.07], [150.51, 154.59],
        [130.62, 104.41], [111.59, 74.14], [64.01, 25.69], [29.41, 10.13],
    ],
    width: 539.78,
    height: 844.29,
};

pub(super) const SCALLOP: PatternShape = PatternShape {
    points: &[
        [-0.35900000000000887, 293.629], [22.83, -34.26], [110.72, -58.88], [123.89, -71.16],
        [163.43, -161.69], [186.26, -185.41], [205.61, -209.14], [251.26, -232.86],
        [314.53, -267.13], [337.41, -278.56], [427.88, -292.59], [463.93, -293.49],
        [601.01, -266.23], [695.9, -202.13], [737.18, -165.22], [779.36, -114.24],
        [846.15, 31.64], [846.15, 212.62], [791.64, 374.32], [715.2, 452.5],
        [702.02, 470.05], [568.48, 548.29], [504.32, 554.41], [417.33, 554.41],
        [285.54, 541.23], [241.62, 513.13], [204.72, 475.33], [159.9, 412.96],
        [126.53, 354.97], [109.82, 337.41], [28.1, 300.51], [22.83, 288.17],
        [0.0, 265.34],
    ],
    width: 846.15,
    height: 847.89,
};

pub(super) const LIGHTNING: PatternShape = PatternShape {
    points: &[
        [144.80399999999997, -0.8640000000000043], [11.7, 22.63], [15.61, 37.45], [0.0, 87.39],
        [-24.97, 107.68], [-49.16, 150.6], [-67.1, 181.03], [-84.27, 197.41],
        [-84.27, 216.93], [-79.59, 235.65], [-97.53, 260.62], [-104.56, 314.45],
        [-104.56, 337.09], [-80.37, 379.22], [-80.37, 433.84], [-117.82, 551.66],
        [-132.65, 614.87], [-145.13, 789.66], [-145.13, 847.39], [-133.43, 835.7],
        [-112.36, 841.16], [-87.39, 832.57], [-78.81, 815.4], [-71.78, 717.87],
        [-43.69, 604.72], [5.47, 479.09], [23.41, 448.66], [101.44, 371.41],
        [124.85, 329.27], [161.53, 281.68], [179.47, 189.6], [190.4, 122.5],
        [190.4, 79.58], [166.99, 60.07], [153.72, 65.53], [138.9, 49.93],
        [93.64, 35.88], [28.09, 0.0],
    ],
    width: 335.53,
    height: 847.39,
};

pub(super) const RAZOR: PatternShape = PatternShape {
    points: &[
        [175.09900000000005, -0.09500000000001307], [23.72, 19.82], [47.45, 106.81], [69.8, 233.34],
        [81.72, 358.49], [93.53, 582.55], [93.53, 781.63], [82.66, 799.39],
        [63.89, 816.84], [51.34, 823.8], [15.82, 836.29], [-20.77, 846.52],
        [-63.27, 846.15], [-79.08, 832.96], [-93.63, 813.57], [-110.4, 779.94],
        [-123.26, 748.31], [-134.81, 706.13], [-145.98, 652.46], [-157.53, 574.33],
        [-166.07, 519.29], [-175.35, 431.04], [-175.66, 251.42], [-169.39, 202.34],
        [-156.53, 142.02], [-143.34, 104.8], [-128.22, 86.04], [-122.94, 73.49],
        [-110.4, 67.9], [-104.81, 61.31], [-54.09, 54.72], [-29.37, 42.17],
        [-8.59, 20.77], [-2.32, 9.28],
    ],
    width: 269.19,
    height: 846.52,
};

pub(super) const BABYLON: PatternShape = PatternShape {
    points: &[
        [261.341, 17.070999999999984], [-21.07, 23.41], [-34.33, 28.09], [-148.26, 245.8],
        [-224.73, 407.32], [-243.45, 444.77], [-262.18, 500.18], [-262.18, 531.39],
        [-252.04, 648.43], [-218.49, 715.54], [-172.45, 763.14], [-117.05, 799.03],
        [43.69, 827.13], [81.15, 827.13], [170.1, 802.16], [321.48, 699.93],
        [409.66, 613.32], [455.7, 494.71], [462.72, 390.93], [451.01, 335.53],
        [403.42, 239.55], [351.14, 169.33], [280.13, 96.76], [266.08, 89.73],
        [240.34, 70.23], [213.8, 47.6], [146.7, 7.02], [109.24, -11.7],
        [84.27, -17.16], [60.09, -10.14],
    ],
    width: 724.9,
    height: 844.29,
};

pub(super) const OYSTER: PatternShape = PatternShape {
    points: &[
        [-0.46699999999998454, 42.03999999999998], [39.01, 41.36], [73.34, 71.01], [81.93, 92.07],
        [110.8, 120.17], [137.33, 135.77], [175.57, 172.44], [205.22, 201.32],
        [231.75, 245.8], [240.33, 275.44], [236.43, 328.51], [203.66, 432.29],
        [175.57, 470.52], [145.13, 528.26], [126.41, 548.55], [101.44, 578.98],
        [71.79, 658.58], [88.95, 681.2], [95.98, 715.53], [84.27, 767.82],
        [66.33, 789.66], [66.33, 799.03], [108.46, 802.16], [230.97, 778.74],
        [317.58, 690.57], [348.8, 643.75], [414.34, 522.8], [442.43, 419.8],
        [461.16, 327.72], [451.02, 245.01], [419.02, 177.91], [390.15, 137.34],
        [354.26, 111.58], [295.74, 53.84], [177.91, 0.0], [103.78, -29.65],
        [60.86, -42.13], [34.33, -35.11], [14.04, -18.72],
    ],
    width: 461.16,
    height: 844.29,
};

pub(super) const ANGEL: PatternShape = PatternShape {
    points: &[
        [582.789, -0.09300000000001774], [-24.22, 23.09], [-57.09, 47.32], [-179.06, 119.98],
        [-246.53, 161.5], [-286.32, 185.72], [-377.16, 252.32], [-447.22, 318.07],
        [-508.64, 375.16], [-519.02, 379.48], [-559.68, 468.58], [-583.03, 530.86],
        [-576.11, 630.34], [-532.86, 708.19], [-438.57, 804.21], [-352.07, 844.29],
        [-136.68, 844.29], [-6.06, 820.64], [84.77, 765.29], [162.62, 686.57],
        [229.23, 610.44], [262.97, 506.64], [262.97, 400.24], [237.88, 303.36],
        [184.25, 207.34], [132.34, 139.01], [101.21, 104.4],
    ],
    width: 846.0,
    height: 844.29,
};
